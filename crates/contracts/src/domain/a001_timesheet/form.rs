use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dto::Timesheet;
use crate::shared::dates::parse_calendar_date;

/// Body the API answers with when the user already logged that project on that day
pub const DUPLICATE_ENTRY_MESSAGE: &str = "Un timesheet pour ce projet et cette date existe déjà.";

pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// Body of `POST /api/Timesheet` and `PUT /api/Timesheet/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub project_id: i64,
    pub date: NaiveDate,
    pub hours_worked: f64,
    /// Spelled this way by the API
    #[serde(rename = "assignementId")]
    pub assignment_id: i64,
}

/// Create/edit form state, inputs kept as typed.
///
/// The assignment is not picked by the user: it is resolved from the selected
/// project (`/api/Timesheet/AssignmentsByProject/{projectId}`) and reset
/// whenever the project changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimesheetForm {
    pub id: Option<i64>,
    pub project_id: Option<i64>,
    pub assignment_id: Option<i64>,
    pub date: String,
    pub hours_worked: String,
}

impl TimesheetForm {
    /// Empty entry for today
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn from_timesheet(timesheet: &Timesheet) -> Self {
        Self {
            id: Some(timesheet.id),
            project_id: timesheet.project_id,
            assignment_id: timesheet.assignment_id,
            date: timesheet
                .work_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            hours_worked: timesheet
                .hours_worked
                .map(|h| h.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn select_project(&mut self, project_id: Option<i64>) {
        if self.project_id != project_id {
            self.project_id = project_id;
            self.assignment_id = None;
        }
    }

    /// Apply the assignment lookup made for `project_id`. A reply for a
    /// project the user has since moved away from is ignored.
    pub fn resolve_assignment(&mut self, project_id: i64, assignment_id: Option<i64>) -> bool {
        if self.project_id != Some(project_id) {
            return false;
        }
        self.assignment_id = assignment_id;
        true
    }

    /// Check every input and build the request body. The first problem found
    /// is returned as a message for the user.
    pub fn validate(&self) -> Result<TimesheetPayload, String> {
        let Some(project_id) = self.project_id else {
            return Err("Un projet doit être sélectionné".into());
        };
        if self.date.trim().is_empty() {
            return Err("La date est obligatoire".into());
        }
        let Some(date) = parse_calendar_date(&self.date) else {
            return Err("La date est invalide".into());
        };
        let hours_worked = parse_hours(&self.hours_worked)?;
        let Some(assignment_id) = self.assignment_id else {
            return Err("Aucune affectation trouvée pour ce projet".into());
        };
        Ok(TimesheetPayload {
            id: self.id,
            project_id,
            date,
            hours_worked,
            assignment_id,
        })
    }
}

/// Accepts "7.5" as well as "7,5"
fn parse_hours(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Le nombre d'heures est obligatoire".into());
    }
    let hours: f64 = input
        .replace(',', ".")
        .parse()
        .map_err(|_| "Le nombre d'heures doit être un nombre".to_string())?;
    if !(hours > 0.0 && hours <= MAX_HOURS_PER_DAY) {
        return Err(format!(
            "Le nombre d'heures doit être compris entre 0 et {}",
            MAX_HOURS_PER_DAY
        ));
    }
    Ok(hours)
}

/// The API reports a duplicate (project, day) as a plain or JSON-quoted string
pub fn is_duplicate_entry(message: &str) -> bool {
    message.trim().trim_matches('"') == DUPLICATE_ENTRY_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TimesheetForm {
        TimesheetForm {
            id: None,
            project_id: Some(3),
            assignment_id: Some(11),
            date: "2024-01-15".to_string(),
            hours_worked: "7,5".to_string(),
        }
    }

    #[test]
    fn test_blank_defaults_to_today() {
        let form = TimesheetForm::blank(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(form.date, "2024-03-09");
        assert!(!form.is_edit_mode());
        assert_eq!(form.validate(), Err("Un projet doit être sélectionné".to_string()));
    }

    #[test]
    fn test_validate_builds_create_body() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.hours_worked, 7.5);
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "projectId": 3,
                "date": "2024-01-15",
                "hoursWorked": 7.5,
                "assignementId": 11
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let mut form = filled();
        form.date = "  ".into();
        assert_eq!(form.validate(), Err("La date est obligatoire".to_string()));
        form.date = "15/01/2024".into();
        assert_eq!(form.validate(), Err("La date est invalide".to_string()));

        let mut form = filled();
        form.hours_worked = "".into();
        assert!(form.validate().is_err());
        form.hours_worked = "abc".into();
        assert_eq!(form.validate(), Err("Le nombre d'heures doit être un nombre".to_string()));
        form.hours_worked = "0".into();
        assert!(form.validate().is_err());
        form.hours_worked = "24.5".into();
        assert!(form.validate().is_err());
        form.hours_worked = "NaN".into();
        assert!(form.validate().is_err());
        form.hours_worked = "24".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_changing_project_drops_assignment() {
        let mut form = filled();
        form.select_project(Some(3));
        assert_eq!(form.assignment_id, Some(11));
        form.select_project(Some(4));
        assert_eq!(form.assignment_id, None);
        assert_eq!(
            form.validate(),
            Err("Aucune affectation trouvée pour ce projet".to_string())
        );
    }

    #[test]
    fn test_late_assignment_reply_is_ignored() {
        let mut form = filled();
        form.select_project(Some(4));
        form.select_project(Some(5));
        assert!(!form.resolve_assignment(4, Some(40)));
        assert_eq!(form.assignment_id, None);
        assert!(form.resolve_assignment(5, Some(50)));
        assert_eq!(form.validate().unwrap().assignment_id, 50);
    }

    #[test]
    fn test_edit_form_from_api_row() {
        let ts: Timesheet = serde_json::from_str(
            r#"{"id": 8, "date": "2024-02-01T00:00:00", "hoursWorked": 8, "projectId": 2, "assignmentId": 5, "isValidated": null}"#,
        )
        .unwrap();
        let form = TimesheetForm::from_timesheet(&ts);
        assert!(form.is_edit_mode());
        assert_eq!(form.date, "2024-02-01");
        assert_eq!(form.hours_worked, "8");

        let payload = form.validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], 8);
        assert_eq!(json["assignementId"], 5);
    }

    #[test]
    fn test_duplicate_entry_detection() {
        assert!(is_duplicate_entry(DUPLICATE_ENTRY_MESSAGE));
        assert!(is_duplicate_entry("\"Un timesheet pour ce projet et cette date existe déjà.\""));
        assert!(!is_duplicate_entry("Internal Server Error"));
    }
}
