use serde::{Deserialize, Serialize};

use crate::shared::lenient;
use crate::shared::list_pipeline::ListRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub project_name: Option<String>,
}

impl ListRecord for Project {
    type Id = i64;

    fn record_id(&self) -> &i64 {
        &self.id
    }

    fn text_field(&self, field: &str) -> Option<&str> {
        match field {
            "projectName" => self.project_name.as_deref(),
            _ => None,
        }
    }
}

/// Entry of `/api/Admin/GetProjectsForUser/{userId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProject {
    pub project_id: i64,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub project_name: Option<String>,
}
