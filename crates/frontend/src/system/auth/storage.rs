use contracts::enums::Role;
use web_sys::window;

use super::session::Session;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(session: &Session) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(ROLE_KEY, session.role.code());
    }
}

/// Session persisted by a previous login, if both keys are present
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let role = storage.get_item(ROLE_KEY).ok()??;
    if token.is_empty() {
        return None;
    }
    Some(Session::new(token, Role::from_code(&role)))
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
