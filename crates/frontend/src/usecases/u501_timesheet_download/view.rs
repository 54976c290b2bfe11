use contracts::domain::a002_project::UserProject;
use contracts::shared::dates::DateRange;
use contracts::system::users::User;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_timesheet_download::{
    DownloadOutcome, DownloadTimesheetsQuery, PendingValidationResponse, TimesheetDownload,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::api_utils::ApiError;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::config::use_config;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::context::{handle_api_error, use_auth};
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api::fetch_users;

fn pending_message(response: &PendingValidationResponse) -> String {
    match response.invalid_timesheets.len() {
        0 => response.message.clone(),
        n => format!("{} ({} timesheet(s) non validé(s))", response.message, n),
    }
}

#[component]
pub fn TimesheetDownloadPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <TimesheetDownloadForm />
        </RequireAdmin>
    }
}

#[component]
fn TimesheetDownloadForm() -> impl IntoView {
    let config = use_config();
    let (auth_state, set_auth_state) = use_auth();
    let api_config = StoredValue::new(config.api.clone());

    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let projects: RwSignal<Vec<UserProject>> = RwSignal::new(Vec::new());
    let selected_user: RwSignal<Option<String>> = RwSignal::new(None);
    let selected_project: RwSignal<Option<i64>> = RwSignal::new(None);
    let range = RwSignal::new(DateRange::default_for(today()));

    let (error, set_error) = signal::<Option<String>>(None);
    let (info, set_info) = signal::<Option<String>>(None);
    let (downloading, set_downloading) = signal(false);
    let confirm_open = RwSignal::new(false);
    let pending: RwSignal<Option<(DownloadTimesheetsQuery, PendingValidationResponse)>> =
        RwSignal::new(None);

    let fail = move |context: &str, e: &ApiError| {
        log::error!("{}: {}", context, e);
        handle_api_error(set_auth_state, e);
        set_error.set(Some(e.to_string()));
    };

    Effect::new(move |_| {
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        spawn_local(async move {
            match fetch_users(&api_config.get_value(), &session).await {
                Ok(list) => {
                    let list: Vec<User> = list.into_iter().filter(User::is_regular_user).collect();
                    users.set(list);
                }
                Err(e) => fail("Failed to fetch users", &e),
            }
        });
    });

    let on_user_change = move |user_id: String| {
        selected_project.set(None);
        projects.set(Vec::new());
        if user_id.is_empty() {
            selected_user.set(None);
            return;
        }
        selected_user.set(Some(user_id.clone()));
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_projects_for_user(&api_config.get_value(), &session, &user_id).await {
                Ok(list) => {
                    // Ignore answers for a user that is no longer selected
                    if selected_user.get_untracked().as_deref() == Some(user_id.as_str()) {
                        projects.set(list);
                    }
                }
                Err(e) => fail("Failed to fetch user projects", &e),
            }
        });
    };

    let run_download = move |query: DownloadTimesheetsQuery| {
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        set_downloading.set(true);
        set_error.set(None);
        set_info.set(None);
        spawn_local(async move {
            match api::download_timesheets(&api_config.get_value(), &session, &query).await {
                Ok(DownloadOutcome::File { file_name, bytes }) => {
                    match api::save_file(&file_name, &bytes) {
                        Ok(()) => set_info.set(Some(format!("Fichier {} téléchargé", file_name))),
                        Err(e) => {
                            log::error!("Failed to save {}: {:#}", file_name, e);
                            set_error.set(Some(format!("Impossible d'enregistrer le fichier : {}", e)));
                        }
                    }
                }
                Ok(DownloadOutcome::PendingValidation(response)) => {
                    log::info!(
                        "{} timesheets awaiting validation",
                        response.invalid_timesheets.len()
                    );
                    pending.set(Some((query, response)));
                    confirm_open.set(true);
                }
                Err(e) => fail("Failed to download timesheets", &e),
            }
            set_downloading.set(false);
        });
    };

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let query = DownloadTimesheetsQuery::from_selection(
            selected_user.get_untracked().as_deref(),
            selected_project.get_untracked(),
            &range.get_untracked(),
        );
        match query {
            Ok(query) => run_download(query),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let on_confirm = move |_: ()| {
        if let Some((query, _)) = pending.get_untracked() {
            pending.set(None);
            run_download(query.confirmed());
        }
    };

    let confirm_message = Signal::derive(move || {
        pending.with(|p| p.as_ref().map(|(_, response)| pending_message(response)).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="u501_timesheet_download--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("download")}
                    <h1 class="page__title">{TimesheetDownload::display_name()}</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || info.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                <Flex vertical=true gap=FlexGap::Medium>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Utilisateur"</Label>
                        <select
                            class="form-select"
                            prop:value=move || selected_user.get().unwrap_or_default()
                            on:change=move |ev| on_user_change(event_target_value(&ev))
                        >
                            <option value="">"Sélectionner un utilisateur"</option>
                            {move || users.get().into_iter().map(|user| {
                                let label = user.user_name.clone().unwrap_or_else(|| user.id.clone());
                                view! { <option value=user.id.clone()>{label}</option> }
                            }).collect_view()}
                        </select>
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Projet"</Label>
                        <select
                            class="form-select"
                            disabled=move || selected_user.with(|u| u.is_none())
                            prop:value=move || selected_project.get().map(|id| id.to_string()).unwrap_or_default()
                            on:change=move |ev| {
                                selected_project.set(event_target_value(&ev).parse::<i64>().ok());
                            }
                        >
                            <option value="">"Sélectionner un projet"</option>
                            {move || projects.get().into_iter().map(|project| {
                                let label = project.project_name.clone().unwrap_or_default();
                                view! { <option value=project.project_id.to_string()>{label}</option> }
                            }).collect_view()}
                        </select>
                    </Flex>

                    <DateRangePicker
                        range=range
                        on_change=Callback::new(move |value: DateRange| range.set(value))
                        label="Période".to_string()
                    />

                    <div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=Signal::derive(move || downloading.get())
                        >
                            {icon("download")}
                            {move || if downloading.get() { " Téléchargement..." } else { " Télécharger" }}
                        </Button>
                    </div>
                </Flex>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Timesheets non validés"
                message=confirm_message
                confirm_label="Télécharger quand même"
                on_confirm=Callback::new(on_confirm)
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_message_mentions_count() {
        let response: PendingValidationResponse = serde_json::from_str(
            r#"{"message": "Certains timesheets ne sont pas validés.",
                "invalidTimesheets": [{"id": 1}, {"id": 2}]}"#,
        )
        .unwrap();
        assert_eq!(
            pending_message(&response),
            "Certains timesheets ne sont pas validés. (2 timesheet(s) non validé(s))"
        );
    }
}
