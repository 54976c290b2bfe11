mod state;

use contracts::domain::a003_assignment::Assignment;
use contracts::shared::list_pipeline::MatchMode;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_assignment::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    view_model_memo, CriteriaTags, CriterionInput, ListPagination, SortableHeader,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::{handle_api_error, use_auth};
use crate::system::auth::guard::RequireAdmin;
use state::{create_state, PROJECT_FIELD, USER_FIELD};

#[component]
pub fn AssignmentsListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AssignmentsList />
        </RequireAdmin>
    }
}

#[component]
fn AssignmentsList() -> impl IntoView {
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

    let load_data = move || {
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_assignments(&api_config.get_value(), &session).await {
                Ok(data) => {
                    log::debug!("Loaded {} assignments", data.len());
                    state.update(|s| s.replace_records(data));
                }
                Err(e) => {
                    log::error!("Failed to fetch assignments: {}", e);
                    handle_api_error(set_auth_state, &e);
                    set_error.set(Some(format!("Impossible de charger les affectations : {}", e)));
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
            match api::delete_assignment(&api_config.get_value(), &session, id).await {
                Ok(()) => {
                    log::info!("Assignment {} deleted", id);
                    state.update(|s| {
                        s.remove_record(&id);
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to delete assignment {}: {}", id, e);
                    handle_api_error(set_auth_state, &e);
                    set_error.set(Some(format!("Erreur lors de la suppression de l'affectation : {}", e)));
                }
            }
            pending_delete.set(None);
        });
    };

    view! {
        <PageFrame page_id="a003_assignment--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("assignments")}
                    <h1 class="page__title">"Affectations"</h1>
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
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=220.0>
                                    <SortableHeader state=state field=PROJECT_FIELD label="Projet" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=180.0>
                                    <SortableHeader state=state field=USER_FIELD label="Utilisateur" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || view_model.get().rows
                                key=|a: &Assignment| a.id
                                children=move |assignment| {
                                    let id = assignment.id;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {assignment.project_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {assignment.user_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
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
                        <div class="table__empty">"Aucune affectation trouvée"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Confirmation de suppression"
                message=Signal::derive(|| "Êtes-vous sûr de vouloir supprimer cette affectation ?".to_string())
                confirm_label="Supprimer"
                on_confirm=Callback::new(confirm_delete)
            />
        </PageFrame>
    }
}
