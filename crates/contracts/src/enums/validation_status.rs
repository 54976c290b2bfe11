use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Timesheet review state.
///
/// On the wire this is the nullable `isValidated` flag:
/// `true` = validated, `false` = rejected, `null` or absent = pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationStatus {
    #[default]
    Pending,
    Validated,
    Rejected,
}

impl ValidationStatus {
    /// Filter value used by the status dropdowns
    pub fn code(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "pending",
            ValidationStatus::Validated => "validated",
            ValidationStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "En attente",
            ValidationStatus::Validated => "Validé",
            ValidationStatus::Rejected => "Rejeté",
        }
    }

    pub fn all() -> Vec<ValidationStatus> {
        vec![
            ValidationStatus::Validated,
            ValidationStatus::Pending,
            ValidationStatus::Rejected,
        ]
    }

    /// Parse a status dropdown selection.
    ///
    /// Accepts the English codes and the French labels used by the admin
    /// screens. Empty or unknown selections mean "no status filter".
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "validated" | "validé" | "valide" => Some(ValidationStatus::Validated),
            "pending" | "en attente" => Some(ValidationStatus::Pending),
            "rejected" | "rejeté" | "rejete" => Some(ValidationStatus::Rejected),
            _ => None,
        }
    }

    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => ValidationStatus::Validated,
            Some(false) => ValidationStatus::Rejected,
            None => ValidationStatus::Pending,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ValidationStatus::Validated => Some(true),
            ValidationStatus::Rejected => Some(false),
            ValidationStatus::Pending => None,
        }
    }
}

impl Serialize for ValidationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_flag().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(ValidationStatus::from_flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Row {
        #[serde(default, rename = "isValidated")]
        status: ValidationStatus,
    }

    #[test]
    fn test_wire_mapping() {
        let row: Row = serde_json::from_str(r#"{"isValidated": true}"#).unwrap();
        assert_eq!(row.status, ValidationStatus::Validated);
        let row: Row = serde_json::from_str(r#"{"isValidated": false}"#).unwrap();
        assert_eq!(row.status, ValidationStatus::Rejected);
        let row: Row = serde_json::from_str(r#"{"isValidated": null}"#).unwrap();
        assert_eq!(row.status, ValidationStatus::Pending);
        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.status, ValidationStatus::Pending);
    }

    #[test]
    fn test_serializes_back_to_nullable_flag() {
        let json = serde_json::to_string(&Row { status: ValidationStatus::Pending }).unwrap();
        assert_eq!(json, r#"{"isValidated":null}"#);
        let json = serde_json::to_string(&Row { status: ValidationStatus::Rejected }).unwrap();
        assert_eq!(json, r#"{"isValidated":false}"#);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ValidationStatus::from_code("validé"), Some(ValidationStatus::Validated));
        assert_eq!(ValidationStatus::from_code("en attente"), Some(ValidationStatus::Pending));
        assert_eq!(ValidationStatus::from_code("Rejected"), Some(ValidationStatus::Rejected));
        assert_eq!(ValidationStatus::from_code(""), None);
        assert_eq!(ValidationStatus::from_code("unknown"), None);
    }
}
