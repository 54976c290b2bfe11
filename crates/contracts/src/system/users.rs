use serde::{Deserialize, Serialize};

use crate::shared::lenient;
use crate::shared::list_pipeline::{ListRecord, SortKey};

/// Role that marks an ordinary timesheet user
pub const USER_ROLE: &str = "User";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_option")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::bool_or_false")]
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Admin screens only list accounts holding the "User" role
    pub fn is_regular_user(&self) -> bool {
        self.roles.iter().any(|r| r == USER_ROLE)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Actif"
        } else {
            "Inactif"
        }
    }
}

impl ListRecord for User {
    type Id = String;

    fn record_id(&self) -> &String {
        &self.id
    }

    fn text_field(&self, field: &str) -> Option<&str> {
        match field {
            "userName" => self.user_name.as_deref(),
            "email" => self.email.as_deref(),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "isActive" => Some(SortKey::Flag(self.is_active)),
            _ => self.text_field(field).map(SortKey::text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_user_filter() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                {"id": "a", "userName": "root", "email": "r@x.fr", "isActive": true, "roles": ["Admin"]},
                {"id": "b", "userName": "jdoe", "email": "j@x.fr", "isActive": false, "roles": ["User"]}
            ]"#,
        )
        .unwrap();
        let regular: Vec<&User> = users.iter().filter(|u| u.is_regular_user()).collect();
        assert_eq!(regular.len(), 1);
        assert_eq!(regular[0].id, "b");
        assert_eq!(regular[0].status_label(), "Inactif");
    }
}
