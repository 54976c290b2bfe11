use contracts::system::users::User;

use crate::shared::api_utils::{get_json, path_segment, post_empty, ApiError};
use crate::shared::config::ApiConfig;
use crate::system::auth::session::Session;

/// Fetch all accounts
pub async fn fetch_users(api: &ApiConfig, session: &Session) -> Result<Vec<User>, ApiError> {
    get_json(api, session, "/api/Admin/GetUsers").await
}

/// Flip the active flag of one account
pub async fn toggle_user_status(
    api: &ApiConfig,
    session: &Session,
    user_id: &str,
) -> Result<(), ApiError> {
    let path = format!("/api/Admin/ToggleUserStatus/{}", path_segment(user_id));
    post_empty(api, session, &path).await
}
