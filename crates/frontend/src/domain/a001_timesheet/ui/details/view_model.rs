use std::rc::Rc;

use contracts::domain::a001_timesheet::form::{is_duplicate_entry, DUPLICATE_ENTRY_MESSAGE};
use contracts::domain::a001_timesheet::TimesheetForm;
use contracts::domain::a002_project::Project;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_timesheet::api;
use crate::shared::api_utils::ApiError;
use crate::shared::config::ApiConfig;
use crate::shared::date_utils::today;
use crate::system::auth::context::{handle_api_error, use_auth, AuthState};
use crate::system::auth::session::Session;

/// ViewModel for the timesheet form
#[derive(Clone, Copy)]
pub struct TimesheetDetailsViewModel {
    pub form: RwSignal<TimesheetForm>,
    pub projects: RwSignal<Vec<Project>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    api: StoredValue<ApiConfig>,
    auth_state: ReadSignal<AuthState>,
    set_auth_state: WriteSignal<AuthState>,
}

impl TimesheetDetailsViewModel {
    pub fn new(api: ApiConfig) -> Self {
        let (auth_state, set_auth_state) = use_auth();
        Self {
            form: RwSignal::new(TimesheetForm::blank(today())),
            projects: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            api: StoredValue::new(api),
            auth_state,
            set_auth_state,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(TimesheetForm::is_edit_mode)
    }

    fn session(&self) -> Option<Session> {
        self.auth_state.with_untracked(|s| s.session.clone())
    }

    fn fail(&self, context: &str, err: &ApiError) {
        log::error!("{}: {}", context, err);
        handle_api_error(self.set_auth_state, err);
        self.error.set(Some(format!("{} : {}", context, err)));
    }

    /// Fetch the user's projects and, in edit mode, the timesheet itself
    pub fn load(&self, id: Option<i64>) {
        let Some(session) = self.session() else {
            return;
        };
        let vm = *self;
        spawn_local(async move {
            let api_config = vm.api.get_value();
            match api::fetch_user_projects(&api_config, &session).await {
                Ok(projects) => vm.projects.set(projects),
                Err(e) => vm.fail("Impossible de charger les projets", &e),
            }

            let Some(id) = id else {
                return;
            };
            match api::fetch_timesheet(&api_config, &session, id).await {
                Ok(timesheet) => {
                    let form = TimesheetForm::from_timesheet(&timesheet);
                    let unresolved = match (form.project_id, form.assignment_id) {
                        (Some(project_id), None) => Some(project_id),
                        _ => None,
                    };
                    vm.form.set(form);
                    if let Some(project_id) = unresolved {
                        vm.resolve_assignment(project_id);
                    }
                }
                Err(e) => vm.fail("Impossible de charger le timesheet", &e),
            }
        });
    }

    pub fn select_project(&self, project_id: Option<i64>) {
        self.form.update(|f| f.select_project(project_id));
        self.error.set(None);
        if let Some(project_id) = project_id {
            self.resolve_assignment(project_id);
        }
    }

    fn resolve_assignment(&self, project_id: i64) {
        let Some(session) = self.session() else {
            return;
        };
        let vm = *self;
        spawn_local(async move {
            match api::fetch_assignments_for_project(&vm.api.get_value(), &session, project_id).await {
                Ok(assignments) => {
                    let first = assignments.first().map(|a| a.id);
                    let applied = vm
                        .form
                        .try_update(|f| f.resolve_assignment(project_id, first))
                        .unwrap_or(false);
                    if applied && first.is_none() {
                        log::warn!("No assignment found for project {}", project_id);
                        vm.error
                            .set(Some("Aucune affectation trouvée pour ce projet".to_string()));
                    }
                }
                Err(e) => vm.fail("Impossible de récupérer l'affectation", &e),
            }
        });
    }

    /// Validate, then POST (new) or PUT (existing)
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let payload = match self.form.with_untracked(TimesheetForm::validate) {
            Ok(payload) => payload,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };
        let Some(session) = self.session() else {
            return;
        };

        self.error.set(None);
        self.saving.set(true);
        let vm = *self;
        spawn_local(async move {
            let api_config = vm.api.get_value();
            let result = match payload.id {
                Some(id) => api::update_timesheet(&api_config, &session, id, &payload).await,
                None => api::create_timesheet(&api_config, &session, &payload).await,
            };
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("Timesheet saved for {} on {}", payload.project_id, payload.date);
                    (on_saved)(());
                }
                Err(ApiError::Status { ref message, .. }) if is_duplicate_entry(message) => {
                    vm.error.set(Some(DUPLICATE_ENTRY_MESSAGE.to_string()));
                }
                Err(e) => vm.fail("Erreur lors de l'enregistrement du timesheet", &e),
            }
        });
    }
}
