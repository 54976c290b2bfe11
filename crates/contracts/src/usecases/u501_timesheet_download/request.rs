use anyhow::{bail, ensure};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::dates::DateRange;

/// Query string of the export endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadTimesheetsQuery {
    pub user_id: String,
    pub project_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Set after the admin confirmed exporting despite unvalidated timesheets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proceed: Option<bool>,
}

impl DownloadTimesheetsQuery {
    /// Build from the form selections; every field is mandatory
    pub fn from_selection(
        user_id: Option<&str>,
        project_id: Option<i64>,
        range: &DateRange,
    ) -> anyhow::Result<Self> {
        let user_id = match user_id.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => bail!("Veuillez sélectionner un utilisateur, un projet et une plage de dates."),
        };
        let (Some(project_id), Some(start_date), Some(end_date)) = (project_id, range.start, range.end) else {
            bail!("Veuillez sélectionner un utilisateur, un projet et une plage de dates.");
        };
        ensure!(
            start_date <= end_date,
            "La date de début doit précéder la date de fin."
        );
        Ok(Self {
            user_id,
            project_id,
            start_date,
            end_date,
            proceed: None,
        })
    }

    /// Same query, confirmed
    pub fn confirmed(&self) -> Self {
        Self {
            proceed: Some(true),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> DateRange {
        DateRange::between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_from_selection_requires_everything() {
        assert!(DownloadTimesheetsQuery::from_selection(None, Some(1), &range()).is_err());
        assert!(DownloadTimesheetsQuery::from_selection(Some(" "), Some(1), &range()).is_err());
        assert!(DownloadTimesheetsQuery::from_selection(Some("u1"), None, &range()).is_err());
        assert!(DownloadTimesheetsQuery::from_selection(Some("u1"), Some(1), &DateRange::default()).is_err());
        let query = DownloadTimesheetsQuery::from_selection(Some("u1"), Some(1), &range()).unwrap();
        assert_eq!(query.proceed, None);
        assert_eq!(query.confirmed().proceed, Some(true));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let reversed = DateRange::between(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert!(DownloadTimesheetsQuery::from_selection(Some("u1"), Some(1), &reversed).is_err());
    }

    #[test]
    fn test_wire_shape() {
        let query = DownloadTimesheetsQuery::from_selection(Some("u1"), Some(4), &range()).unwrap();
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["projectId"], 4);
        assert_eq!(json["startDate"], "2024-01-01");
        assert!(json.get("proceed").is_none());
    }
}
