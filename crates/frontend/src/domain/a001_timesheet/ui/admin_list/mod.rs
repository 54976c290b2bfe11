mod state;

use contracts::domain::a001_timesheet::Timesheet;
use contracts::enums::ValidationStatus;
use contracts::shared::dates::DateRange;
use contracts::shared::list_pipeline::{MatchMode, DATE_FIELD};
use leptos::prelude::*;
use leptos::task::spawn_local;
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
    view_model_memo, CriteriaTags, CriterionInput, ListPagination, SortableHeader, StatusSelect,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::{handle_api_error, use_auth};
use crate::system::auth::guard::RequireAdmin;
use state::{create_state, PROJECT_FIELD, USER_FIELD};

fn row_class(status: ValidationStatus) -> &'static str {
    match status {
        ValidationStatus::Validated => "table__row table__row--validated",
        ValidationStatus::Rejected => "table__row table__row--rejected",
        ValidationStatus::Pending => "table__row",
    }
}

#[component]
pub fn AdminTimesheetsPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminTimesheets />
        </RequireAdmin>
    }
}

#[component]
fn AdminTimesheets() -> impl IntoView {
    let config = use_config();
    let (auth_state, set_auth_state) = use_auth();
    let api_config = StoredValue::new(config.api.clone());

    let state = create_state(&config.lists);
    let view_model = view_model_memo(state);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let filters_expanded = RwSignal::new(true);
    let confirm_open = RwSignal::new(false);
    // (timesheet id, approve)
    let pending_decision: RwSignal<Option<(i64, bool)>> = RwSignal::new(None);

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
            match api::fetch_all_timesheets(&api_config.get_value(), &session).await {
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

    let ask_decision = move |id: i64, approve: bool| {
        pending_decision.set(Some((id, approve)));
        confirm_open.set(true);
    };

    let confirm_decision = move |_: ()| {
        let Some((id, approve)) = pending_decision.get_untracked() else {
            return;
        };
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        spawn_local(async move {
            match api::validate_timesheet(&api_config.get_value(), &session, id, approve).await {
                Ok(()) => {
                    let status = ValidationStatus::from_flag(Some(approve));
                    log::info!("Timesheet {} set to {}", id, status.code());
                    state.update(|s| {
                        s.update_record(&id, |t| t.status = status);
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to review timesheet {}: {}", id, e);
                    handle_api_error(set_auth_state, &e);
                    let action = if approve { "la validation" } else { "le rejet" };
                    set_error.set(Some(format!("Erreur lors de {} du timesheet : {}", action, e)));
                }
            }
            pending_decision.set(None);
        });
    };

    let confirm_message = Signal::derive(move || {
        pending_decision.with(|decision| match decision {
            Some((_, true)) => "Voulez-vous valider ce timesheet ?".to_string(),
            Some((_, false)) => "Voulez-vous rejeter ce timesheet ?".to_string(),
            None => String::new(),
        })
    });

    view! {
        <PageFrame page_id="a001_timesheet--admin_list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("timesheets")}
                    <h1 class="page__title">"Liste des timesheets"</h1>
                    <Badge>
                        {move || view_model.with(|vm| vm.total_count).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
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
                        <CriteriaTags
                            state=state
                            labels=&[(PROJECT_FIELD, "Projet"), (USER_FIELD, "Utilisateur")]
                        />
                    }.into_any()
                >
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Projet"</Label>
                            <CriterionInput
                                state=state
                                field=PROJECT_FIELD
                                mode=MatchMode::Contains
                                placeholder="Rechercher par projet"
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Utilisateur"</Label>
                            <CriterionInput
                                state=state
                                field=USER_FIELD
                                mode=MatchMode::Contains
                                placeholder="Rechercher par utilisateur"
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Statut"</Label>
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
                                <TableHeaderCell min_width=160.0>
                                    <SortableHeader state=state field=USER_FIELD label="Utilisateur" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=180.0>
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
                                <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || view_model.get().rows
                                key=|t: &Timesheet| (t.id, t.status)
                                children=move |timesheet| {
                                    let id = timesheet.id;
                                    let pending = timesheet.status == ValidationStatus::Pending;
                                    let user_name = timesheet.user_name.clone().unwrap_or_default();
                                    let project_label = timesheet.project_label().to_string();
                                    let date = timesheet.date.as_deref().map(format_date).unwrap_or_default();
                                    let hours = timesheet.hours_worked.map(|h| format!("{} h", format_hours(h))).unwrap_or_default();
                                    let status = timesheet.status;
                                    view! {
                                        <TableRow class=row_class(timesheet.status)>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user_name}
                                                </TableCellLayout>
                                            </TableCell>
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
                                                <Show when=move || pending>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Primary
                                                            on_click=move |_| ask_decision(id, true)
                                                        >
                                                            {icon("check")}
                                                            " Valider"
                                                        </Button>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| ask_decision(id, false)
                                                        >
                                                            {icon("x")}
                                                            " Rejeter"
                                                        </Button>
                                                    </Flex>
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && view_model.with(|vm| vm.is_empty())>
                        <div class="table__empty">"Aucun timesheet trouvé"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Confirmation"
                message=confirm_message
                on_confirm=Callback::new(confirm_decision)
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class_per_status() {
        assert_eq!(row_class(ValidationStatus::Pending), "table__row");
        assert!(row_class(ValidationStatus::Validated).ends_with("--validated"));
        assert!(row_class(ValidationStatus::Rejected).ends_with("--rejected"));
    }
}
