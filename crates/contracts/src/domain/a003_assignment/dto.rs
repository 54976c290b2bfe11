use serde::{Deserialize, Serialize};

use crate::shared::lenient;
use crate::shared::list_pipeline::ListRecord;

/// User-to-project assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub user_name: Option<String>,
}

impl ListRecord for Assignment {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{build_view_model, FilterCriteria, PageWindow, SortSpec};

    #[test]
    fn test_project_and_user_search() {
        let rows: Vec<Assignment> = serde_json::from_str(
            r#"[
                {"id": 1, "projectName": "Alpha", "userName": "ann"},
                {"id": 2, "projectName": "Beta", "userName": "bob"},
                {"id": 3, "projectName": "alphabet", "userName": "Bobby"},
                {"id": 4, "userName": "bob"}
            ]"#,
        )
        .unwrap();
        let criteria = FilterCriteria::new()
            .with_contains("projectName", "ALPHA")
            .with_contains("userName", "bob");
        let vm = build_view_model(&rows, &criteria, &SortSpec::ascending("projectName"), PageWindow::new(25));
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].id, 3);
    }
}
