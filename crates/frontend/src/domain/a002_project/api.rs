use contracts::domain::a002_project::Project;

use crate::shared::api_utils::{delete, get_json, ApiError};
use crate::shared::config::ApiConfig;
use crate::system::auth::session::Session;

pub async fn fetch_projects(api: &ApiConfig, session: &Session) -> Result<Vec<Project>, ApiError> {
    get_json(api, session, "/api/Admin/GetProjects").await
}

pub async fn delete_project(api: &ApiConfig, session: &Session, id: i64) -> Result<(), ApiError> {
    delete(api, session, &format!("/api/Admin/DeleteProject/{}", id)).await
}
