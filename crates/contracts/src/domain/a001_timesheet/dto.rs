use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::ValidationStatus;
use crate::shared::dates::parse_calendar_date;
use crate::shared::lenient;
use crate::shared::list_pipeline::{ListRecord, SortKey};

/// Placeholder shown when the API did not resolve the project
pub const MISSING_PROJECT_LABEL: &str = "Projet non disponible";

/// Timesheet row as returned by `/api/Timesheet` and `/api/Admin/GetTimesheets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64_option")]
    pub hours_worked: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::i64_option")]
    pub project_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::i64_option")]
    pub assignment_id: Option<i64>,
    #[serde(default, rename = "isValidated")]
    pub status: ValidationStatus,
}

impl Timesheet {
    /// Worked day; `None` when the API sent nothing usable
    pub fn work_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_calendar_date)
    }

    /// Only timesheets still awaiting review may be deleted by their owner
    pub fn can_delete(&self) -> bool {
        self.status == ValidationStatus::Pending
    }

    pub fn project_label(&self) -> &str {
        self.project_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(MISSING_PROJECT_LABEL)
    }
}

impl ListRecord for Timesheet {
    type Id = i64;

    fn record_id(&self) -> &i64 {
        &self.id
    }

    fn text_field(&self, field: &str) -> Option<&str> {
        match field {
            "projectName" => self.project_name.as_deref(),
            "userName" => self.user_name.as_deref(),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "date" => self.work_date().map(SortKey::Date),
            "hoursWorked" => self.hours_worked.map(SortKey::Number),
            "isValidated" => Some(SortKey::Text(self.status.code().to_string())),
            _ => self.text_field(field).map(SortKey::text),
        }
    }

    fn record_date(&self) -> Option<NaiveDate> {
        self.work_date()
    }

    fn validation_status(&self) -> Option<ValidationStatus> {
        Some(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::DateRange;
    use crate::shared::list_pipeline::{
        build_view_model, filter_records, FilterCriteria, PageWindow, SortSpec,
    };

    #[test]
    fn test_deserialize_api_row() {
        let json = r#"{
            "id": 42,
            "date": "2024-01-15T00:00:00",
            "hoursWorked": 7.5,
            "projectName": "Alpha",
            "userName": "jdoe",
            "isValidated": null
        }"#;
        let ts: Timesheet = serde_json::from_str(json).unwrap();
        assert_eq!(ts.id, 42);
        assert_eq!(ts.work_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(ts.status, ValidationStatus::Pending);
        assert_eq!(ts.hours_worked, Some(7.5));
    }

    #[test]
    fn test_malformed_fields_do_not_fail() {
        let ts: Timesheet = serde_json::from_str(r#"{"id": 1, "date": "garbage"}"#).unwrap();
        assert_eq!(ts.work_date(), None);
        assert_eq!(ts.project_label(), MISSING_PROJECT_LABEL);

        let criteria = FilterCriteria::new()
            .with_date_range(DateRange::from_inputs("2024-01-01", "2024-12-31"));
        assert!(!criteria.matches(&ts));
    }

    #[test]
    fn test_null_and_mistyped_fields_keep_the_row() {
        let json = r#"[
            {"id": 1, "date": "2024-01-10", "hoursWorked": null, "projectName": "Alpha", "isValidated": null},
            {"id": 2, "date": 20240110, "hoursWorked": 4, "projectName": null, "isValidated": true},
            {"id": 3, "date": null, "hoursWorked": "6.5", "userName": 12, "projectId": "9"}
        ]"#;
        let rows: Vec<Timesheet> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].hours_worked, None);
        assert_eq!(rows[0].sort_key("hoursWorked"), None);
        assert_eq!(rows[1].date, None);
        assert_eq!(rows[1].project_label(), MISSING_PROJECT_LABEL);
        assert_eq!(rows[2].hours_worked, Some(6.5));
        assert_eq!(rows[2].user_name, None);
        assert_eq!(rows[2].project_id, Some(9));

        let criteria = FilterCriteria::new()
            .with_date_range(DateRange::from_inputs("2024-01-01", "2024-01-31"));
        let kept: Vec<i64> = filter_records(&rows, &criteria).iter().map(|t| t.id).collect();
        assert_eq!(kept, vec![1]);
    }

    #[test]
    fn test_admin_pipeline_over_api_rows() {
        let json = r#"[
            {"id": 1, "date": "2024-01-10", "hoursWorked": 8, "projectName": "Beta", "userName": "ann", "isValidated": true},
            {"id": 2, "date": "2024-01-03", "hoursWorked": 4, "projectName": "Alpha", "userName": "bob", "isValidated": null},
            {"id": 3, "hoursWorked": 2, "projectName": "Alpha", "userName": "bob", "isValidated": null},
            {"id": 4, "date": "2024-01-02", "hoursWorked": 6, "projectName": "Alpha", "userName": "ann", "isValidated": false}
        ]"#;
        let rows: Vec<Timesheet> = serde_json::from_str(json).unwrap();

        let vm = build_view_model(
            &rows,
            &FilterCriteria::new().with_contains("projectName", "alp"),
            &SortSpec::ascending("projectName"),
            PageWindow::new(25),
        );
        let ids: Vec<i64> = vm.rows.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 2, 3]);
    }

    #[test]
    fn test_only_pending_can_be_deleted() {
        let mut ts: Timesheet = serde_json::from_str(r#"{"id": 1, "isValidated": null}"#).unwrap();
        assert!(ts.can_delete());
        ts.status = ValidationStatus::Validated;
        assert!(!ts.can_delete());
        ts.status = ValidationStatus::Rejected;
        assert!(!ts.can_delete());
    }
}
