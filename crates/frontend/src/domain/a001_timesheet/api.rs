use contracts::domain::a001_timesheet::{Timesheet, TimesheetPayload};
use contracts::domain::a002_project::Project;
use contracts::domain::a003_assignment::Assignment;

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};
use crate::shared::config::ApiConfig;
use crate::system::auth::session::Session;

/// Timesheets of the signed-in user
pub async fn fetch_my_timesheets(api: &ApiConfig, session: &Session) -> Result<Vec<Timesheet>, ApiError> {
    get_json(api, session, "/api/Timesheet").await
}

pub async fn fetch_timesheet(api: &ApiConfig, session: &Session, id: i64) -> Result<Timesheet, ApiError> {
    get_json(api, session, &format!("/api/Timesheet/{}", id)).await
}

pub async fn create_timesheet(
    api: &ApiConfig,
    session: &Session,
    payload: &TimesheetPayload,
) -> Result<(), ApiError> {
    post_json(api, session, "/api/Timesheet", payload).await
}

pub async fn update_timesheet(
    api: &ApiConfig,
    session: &Session,
    id: i64,
    payload: &TimesheetPayload,
) -> Result<(), ApiError> {
    put_json(api, session, &format!("/api/Timesheet/{}", id), payload).await
}

pub async fn delete_timesheet(api: &ApiConfig, session: &Session, id: i64) -> Result<(), ApiError> {
    delete(api, session, &format!("/api/Timesheet/{}", id)).await
}

/// Projects the signed-in user is assigned to
pub async fn fetch_user_projects(api: &ApiConfig, session: &Session) -> Result<Vec<Project>, ApiError> {
    get_json(api, session, "/api/Timesheet/UserProjects").await
}

/// Assignments linking the signed-in user to `project_id`; the first one is used
pub async fn fetch_assignments_for_project(
    api: &ApiConfig,
    session: &Session,
    project_id: i64,
) -> Result<Vec<Assignment>, ApiError> {
    get_json(api, session, &format!("/api/Timesheet/AssignmentsByProject/{}", project_id)).await
}

/// Every user's timesheets (admin)
pub async fn fetch_all_timesheets(api: &ApiConfig, session: &Session) -> Result<Vec<Timesheet>, ApiError> {
    get_json(api, session, "/api/Admin/GetTimesheets").await
}

/// Validate (`true`) or reject (`false`); the body is a bare JSON boolean
pub async fn validate_timesheet(
    api: &ApiConfig,
    session: &Session,
    id: i64,
    approve: bool,
) -> Result<(), ApiError> {
    post_json(api, session, &format!("/api/Admin/ValidateTimesheet/{}", id), &approve).await
}
