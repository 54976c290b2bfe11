use leptos::prelude::*;

use super::session::Session;
use super::storage;
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }
}

/// Auth context provider; restores the session saved by the last login
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        session: storage::load_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn sign_in(set_auth_state: WriteSignal<AuthState>, session: Session) {
    storage::save_session(&session);
    set_auth_state.set(AuthState {
        session: Some(session),
    });
}

pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

/// A rejected token ends the session; every other error is left to the page
pub fn handle_api_error(set_auth_state: WriteSignal<AuthState>, err: &ApiError) {
    if *err == ApiError::NotAuthenticated {
        log::warn!("Token rejected by the API, signing out");
        sign_out(set_auth_state);
    }
}
