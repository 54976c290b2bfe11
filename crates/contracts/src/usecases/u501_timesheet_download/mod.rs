pub mod request;
pub mod response;

pub use request::DownloadTimesheetsQuery;
pub use response::{attachment_file_name, DownloadOutcome, PendingValidationResponse, DEFAULT_FILE_NAME};

use crate::usecases::common::UseCaseMetadata;

pub const DOWNLOAD_PATH: &str = "/api/Admin/DownloadTimesheets";

pub fn projects_for_user_path(user_id: &str) -> String {
    format!("/api/Admin/GetProjectsForUser/{}", user_id)
}

pub struct TimesheetDownload;

impl UseCaseMetadata for TimesheetDownload {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "timesheet_download"
    }

    fn display_name() -> &'static str {
        "Télécharger les timesheets"
    }

    fn description() -> &'static str {
        "Export Excel des heures d'un utilisateur sur un projet et une période"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(TimesheetDownload::full_name(), "u501_timesheet_download");
        assert_eq!(projects_for_user_path("abc"), "/api/Admin/GetProjectsForUser/abc");
    }
}
