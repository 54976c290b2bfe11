use serde::{Deserialize, Serialize};

use crate::domain::a001_timesheet::Timesheet;

pub const DEFAULT_FILE_NAME: &str = "Timesheets.xlsx";

/// JSON answer when the period still has timesheets awaiting validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingValidationResponse {
    pub message: String,
    #[serde(default)]
    pub invalid_timesheets: Vec<Timesheet>,
}

/// What the export endpoint returned
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    /// Workbook bytes ready to save
    File { file_name: String, bytes: Vec<u8> },
    /// Needs confirmation before exporting
    PendingValidation(PendingValidationResponse),
}

/// File name from a `Content-Disposition` attachment header
pub fn attachment_file_name(content_disposition: Option<&str>) -> String {
    content_disposition
        .filter(|header| header.contains("attachment"))
        .and_then(|header| {
            let start = header.find("filename=")? + "filename=".len();
            let value = header[start..].trim_start_matches('"');
            let end = value.find(['"', ';']).unwrap_or(value.len());
            let name = value[..end].trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_file_name() {
        assert_eq!(
            attachment_file_name(Some(r#"attachment; filename="Alice_Alpha.xlsx""#)),
            "Alice_Alpha.xlsx"
        );
        assert_eq!(
            attachment_file_name(Some("attachment; filename=report.xlsx; filename*=UTF-8''report.xlsx")),
            "report.xlsx"
        );
        assert_eq!(attachment_file_name(Some("inline")), DEFAULT_FILE_NAME);
        assert_eq!(attachment_file_name(Some("attachment")), DEFAULT_FILE_NAME);
        assert_eq!(attachment_file_name(None), DEFAULT_FILE_NAME);
    }

    #[test]
    fn test_pending_response_decodes() {
        let response: PendingValidationResponse = serde_json::from_str(
            r#"{"message": "Des timesheets ne sont pas validés", "invalidTimesheets": [{"id": 1, "date": "2024-01-02", "hoursWorked": 7.5, "projectName": "Alpha", "isValidated": null}]}"#,
        )
        .unwrap();
        assert_eq!(response.invalid_timesheets.len(), 1);
    }
}
