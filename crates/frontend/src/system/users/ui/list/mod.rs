mod state;

use contracts::shared::list_pipeline::MatchMode;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

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
use crate::system::users::api;
use state::{create_state, USER_NAME_FIELD};

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let config = use_config();
    let (auth_state, set_auth_state) = use_auth();
    let api_config = StoredValue::new(config.api.clone());

    let state = create_state(&config.lists);
    let view_model = view_model_memo(state);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let filters_expanded = RwSignal::new(true);
    let confirm_open = RwSignal::new(false);
    let pending_toggle: RwSignal<Option<User>> = RwSignal::new(None);

    let load_data = move || {
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users(&api_config.get_value(), &session).await {
                Ok(users) => {
                    let users: Vec<User> = users.into_iter().filter(User::is_regular_user).collect();
                    log::debug!("Loaded {} users", users.len());
                    state.update(|s| s.replace_records(users));
                }
                Err(e) => {
                    log::error!("Failed to fetch users: {}", e);
                    handle_api_error(set_auth_state, &e);
                    set_error.set(Some(format!("Impossible de charger les utilisateurs : {}", e)));
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

    let ask_toggle = move |user: User| {
        pending_toggle.set(Some(user));
        confirm_open.set(true);
    };

    let confirm_toggle = move |_: ()| {
        let Some(user) = pending_toggle.get_untracked() else {
            return;
        };
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        spawn_local(async move {
            match api::toggle_user_status(&api_config.get_value(), &session, &user.id).await {
                Ok(()) => {
                    let now_active = !user.is_active;
                    state.update(|s| {
                        s.update_record(&user.id, |u| u.is_active = now_active);
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to toggle user {}: {}", user.id, e);
                    handle_api_error(set_auth_state, &e);
                    set_error.set(Some(format!(
                        "Erreur lors du changement de statut de l'utilisateur : {}",
                        e
                    )));
                }
            }
            pending_toggle.set(None);
        });
    };

    let confirm_message = Signal::derive(move || {
        pending_toggle.with(|user| match user {
            Some(u) if u.is_active => "Voulez-vous vraiment désactiver cet utilisateur ?".to_string(),
            Some(_) => "Voulez-vous vraiment activer cet utilisateur ?".to_string(),
            None => String::new(),
        })
    });

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">"Liste des utilisateurs"</h1>
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
                        <CriteriaTags state=state labels=&[(USER_NAME_FIELD, "Utilisateur")] />
                    }.into_any()
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <CriterionInput
                                state=state
                                field=USER_NAME_FIELD
                                mode=MatchMode::Contains
                                placeholder="Rechercher par nom d'utilisateur"
                            />
                        </div>
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>
                                    <SortableHeader state=state field=USER_NAME_FIELD label="Nom d'utilisateur" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=200.0>
                                    <SortableHeader state=state field="email" label="Email" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    <SortableHeader state=state field="isActive" label="Statut" />
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || view_model.get().rows
                                key=|u| (u.id.clone(), u.is_active)
                                children=move |user| {
                                    let for_toggle = user.clone();
                                    let user_name = user.user_name.clone().unwrap_or_default();
                                    let email = user.email.clone().unwrap_or_default();
                                    let status_label = user.status_label();
                                    let is_active = user.is_active;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user_name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge
                                                        appearance=BadgeAppearance::Tint
                                                        color=if is_active { BadgeColor::Success } else { BadgeColor::Danger }
                                                    >
                                                        {status_label}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| ask_toggle(for_toggle.clone())
                                                >
                                                    {if is_active { "Désactiver" } else { "Activer" }}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && view_model.with(|vm| vm.is_empty())>
                        <div class="table__empty">"Aucun utilisateur trouvé"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Confirmation"
                message=confirm_message
                on_confirm=Callback::new(confirm_toggle)
            />
        </PageFrame>
    }
}
