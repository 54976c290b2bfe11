use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::dates::parse_timestamp;
use crate::shared::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub date_created: String,
    #[serde(default, deserialize_with = "lenient::bool_or_false")]
    pub is_read: bool,
}

impl Notification {
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date_created)
    }
}

/// Which navbar owns the bell; selects endpoints and mark-read delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationScope {
    User,
    Admin,
}

impl NotificationScope {
    pub fn api_prefix(&self) -> &'static str {
        match self {
            NotificationScope::User => "/api/Timesheet",
            NotificationScope::Admin => "/api/Admin",
        }
    }

    pub fn list_path(&self) -> String {
        format!("{}/GetNotifications", self.api_prefix())
    }

    pub fn mark_read_path(&self, id: i64) -> String {
        format!("{}/MarkNotificationAsRead/{}", self.api_prefix(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_paths() {
        assert_eq!(NotificationScope::User.list_path(), "/api/Timesheet/GetNotifications");
        assert_eq!(
            NotificationScope::Admin.mark_read_path(7),
            "/api/Admin/MarkNotificationAsRead/7"
        );
    }

    #[test]
    fn test_deserialize() {
        let n: Notification = serde_json::from_str(
            r#"{"id": 3, "message": "Timesheet validé", "dateCreated": "2024-01-05T08:00:00", "isRead": false}"#,
        )
        .unwrap();
        assert!(!n.is_read);
        assert!(n.created_at().is_some());
    }

    #[test]
    fn test_null_fields_still_decode() {
        let items: Vec<Notification> = serde_json::from_str(
            r#"[
                {"id": 1, "message": null, "dateCreated": "2024-01-05T08:00:00", "isRead": false},
                {"id": 2, "message": "Nouveau projet", "dateCreated": null, "isRead": null},
                {"id": 3, "message": 42, "dateCreated": 1704441600}
            ]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].message, "");
        assert!(items[0].created_at().is_some());
        assert_eq!(items[1].created_at(), None);
        assert!(!items[1].is_read);
        assert_eq!(items[2].message, "");
        assert_eq!(items[2].created_at(), None);
    }
}
