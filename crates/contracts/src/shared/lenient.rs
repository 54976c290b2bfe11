//! Field deserializers for API payloads that are not always well typed.
//!
//! Use with `#[serde(default, deserialize_with = "...")]`. A `null` or a value
//! of the wrong JSON type becomes `None` / the default instead of failing the
//! whole row.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String field; anything that is not a JSON string is `None`
pub fn string_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Like [`string_option`] but collapses to an empty string
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    string_option(deserializer).map(Option::unwrap_or_default)
}

/// Number field; numeric strings ("7.5") are accepted, anything else is `None`
pub fn f64_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => Ok(s.trim().parse::<f64>().ok().filter(|v| v.is_finite())),
        _ => Ok(None),
    }
}

pub fn i64_option<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Ok(n.as_i64()),
        Some(Value::String(s)) => Ok(s.trim().parse::<i64>().ok()),
        _ => Ok(None),
    }
}

/// Boolean field; `null` and non-booleans read as `false`
pub fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Ok(b),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string_option")]
        label: Option<String>,
        #[serde(default, deserialize_with = "f64_option")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "i64_option")]
        owner: Option<i64>,
        #[serde(default, deserialize_with = "bool_or_false")]
        flag: bool,
    }

    #[test]
    fn test_wrong_types_become_empty() {
        let row: Row = serde_json::from_str(
            r#"{"label": 20240110, "amount": "n/a", "owner": true, "flag": "yes"}"#,
        )
        .unwrap();
        assert_eq!(row.label, None);
        assert_eq!(row.amount, None);
        assert_eq!(row.owner, None);
        assert!(!row.flag);
    }

    #[test]
    fn test_nulls_and_missing() {
        let row: Row =
            serde_json::from_str(r#"{"label": null, "amount": null, "owner": null, "flag": null}"#)
                .unwrap();
        assert_eq!(row.label, None);
        assert_eq!(row.amount, None);
        assert!(!row.flag);

        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.owner, None);
    }

    #[test]
    fn test_well_typed_values_pass_through() {
        let row: Row =
            serde_json::from_str(r#"{"label": "Alpha", "amount": "7.5", "owner": 3, "flag": true}"#)
                .unwrap();
        assert_eq!(row.label.as_deref(), Some("Alpha"));
        assert_eq!(row.amount, Some(7.5));
        assert_eq!(row.owner, Some(3));
        assert!(row.flag);
    }
}
