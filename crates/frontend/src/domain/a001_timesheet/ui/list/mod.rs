mod state;

use contracts::domain::a001_timesheet::Timesheet;
use contracts::shared::dates::DateRange;
use contracts::shared::list_pipeline::{distinct_values, DATE_FIELD};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a001_timesheet::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_date, format_hours};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    view_model_memo, CriteriaTags, CriterionSelect, ListPagination, SortableHeader, StatusSelect,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::{handle_api_error, use_auth};
use crate::system::auth::guard::RequireAuth;
use state::{create_state, PROJECT_FIELD};

#[component]
pub fn MyTimesheetsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <MyTimesheets />
        </RequireAuth>
    }
}

#[component]
fn MyTimesheets() -> impl IntoView {
    let config = use_config();
    let (auth_state, set_auth_state) = use_auth();
    let api_config = StoredValue::new(config.api.clone());

    let state = create_state(&config.lists);
    let view_model = view_model_memo(state);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let filters_expanded = RwSignal::new(true);
    let confirm_open = RwSignal::new(false);
    let pending_delete: RwSignal<Option<i64>> = RwSignal::new(None);

    let project_options =
        Signal::derive(move || state.with(|s| distinct_values(s.records(), PROJECT_FIELD)));
    let date_range = Signal::derive(move || {
        state.with(|s| s.criteria.date_range.unwrap_or_default())
    });

    let load_data = move || {
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_my_timesheets(&api_config.get_value(), &session).await {
                Ok(data) => {
                    log::debug!("Loaded {} timesheets", data.len());
                    state.update(|s| s.replace_records(data));
                }
                Err(e) => {
                    log::error!("Failed to fetch timesheets: {}", e);
                    handle_api_error(set_auth_state, &e);
                    set_error.set(Some(format!("Impossible de charger les timesheets : {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let ask_delete = move |id: i64| {
        pending_delete.set(Some(id));
        confirm_open.set(true);
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        spawn_local(async move {
            match api::delete_timesheet(&api_config.get_value(), &session, id).await {
                Ok(()) => {
                    state.update(|s| {
                        s.remove_record(&id);
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to delete timesheet {}: {}", id, e);
                    handle_api_error(set_auth_state, &e);
                    set_error.set(Some(format!("Erreur lors de la suppression du timesheet : {}", e)));
                }
            }
            pending_delete.set(None);
        });
    };

    view! {
        <PageFrame page_id="a001_timesheet--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("timesheets")}
                    <h1 class="page__title">"Mes timesheets"</h1>
                    <Badge>
                        {move || view_model.with(|vm| vm.total_count).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <A href="/timesheets/new" attr:class="btn btn-primary">
                        {icon("plus")}
                        " Nouveau timesheet"
                    </A>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Chargement..." } else { " Actualiser" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.criteria.active_count()))
                    pagination_controls=view! {
                        <ListPagination
                            state=state
                            view_model=view_model
                            page_size_options=config.lists.page_size_options.clone()
                        />
                    }.into_any()
                    filter_tags=view! {
                        <CriteriaTags state=state labels=&[(PROJECT_FIELD, "Projet")] />
                    }.into_any()
                >
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Filtrer par projet"</Label>
                            <CriterionSelect
                                state=state
                                field=PROJECT_FIELD
                                options=project_options
                                all_label="Tous les projets"
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Filtrer par statut"</Label>
                            <StatusSelect state=state />
                        </Flex>
                        <DateRangePicker
                            range=date_range
                            on_change=Callback::new(move |range: DateRange| {
                                state.update(|s| s.update_criteria(|c| c.date_range = Some(range)))
                            })
                            label="Période".to_string()
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=200.0>
                                    <SortableHeader state=state field=PROJECT_FIELD label="Projet" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=110.0>
                                    <SortableHeader state=state field=DATE_FIELD label="Date" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                    <SortableHeader state=state field="hoursWorked" label="Heures" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=110.0>
                                    <SortableHeader state=state field="isValidated" label="Statut" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || view_model.get().rows
                                key=|t: &Timesheet| (t.id, t.status)
                                children=move |timesheet| {
                                    let id = timesheet.id;
                                    let can_delete = timesheet.can_delete();
                                    let project_label = timesheet.project_label().to_string();
                                    let date = timesheet.date.as_deref().map(format_date).unwrap_or_default();
                                    let hours = timesheet.hours_worked.map(|h| format!("{} h", format_hours(h))).unwrap_or_default();
                                    let status = timesheet.status;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{project_label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {date}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {hours}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=move || can_delete>
                                                    <A href=format!("/timesheets/edit/{}", id) attr:title="Modifier">
                                                        {icon("edit")}
                                                    </A>
                                                </Show>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=!can_delete
                                                    on_click=move |_| ask_delete(id)
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && view_model.with(|vm| vm.is_empty())>
                        <div class="table__empty">"Aucun timesheet disponible"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Confirmation de suppression"
                message=Signal::derive(|| "Êtes-vous sûr de vouloir supprimer ce timesheet ?".to_string())
                confirm_label="Supprimer"
                on_confirm=Callback::new(confirm_delete)
            />
        </PageFrame>
    }
}
