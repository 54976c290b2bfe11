use contracts::domain::a003_assignment::Assignment;

use crate::shared::api_utils::{delete, get_json, ApiError};
use crate::shared::config::ApiConfig;
use crate::system::auth::session::Session;

pub async fn fetch_assignments(api: &ApiConfig, session: &Session) -> Result<Vec<Assignment>, ApiError> {
    get_json(api, session, "/api/Admin/GetAssignments").await
}

pub async fn delete_assignment(api: &ApiConfig, session: &Session, id: i64) -> Result<(), ApiError> {
    delete(api, session, &format!("/api/Admin/DeleteAssignment/{}", id)).await
}
