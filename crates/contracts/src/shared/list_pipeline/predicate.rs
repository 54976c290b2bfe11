use super::record::ListRecord;
use crate::enums::ValidationStatus;
use crate::shared::dates::DateRange;

/// How a text filter compares against the record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Free-text search box
    Contains,
    /// Dropdown selection
    Exact,
}

/// Text or dropdown filter bound to one field.
///
/// The value is normalised once on construction so evaluating a record costs a
/// single comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    field: String,
    mode: MatchMode,
    value: String,
    normalized: String,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, mode: MatchMode, value: impl Into<String>) -> Self {
        let value = value.into();
        let normalized = value.to_lowercase();
        Self {
            field: field.into(),
            mode,
            value,
            normalized,
        }
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, MatchMode::Contains, value)
    }

    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, MatchMode::Exact, value)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Value as typed by the user
    pub fn value(&self) -> &str {
        &self.value
    }

    /// An empty value filters nothing
    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn matches<R: ListRecord>(&self, record: &R) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(actual) = record.text_field(&self.field) else {
            return false;
        };
        let actual = actual.to_lowercase();
        match self.mode {
            MatchMode::Contains => actual.contains(&self.normalized),
            MatchMode::Exact => actual == self.normalized,
        }
    }
}

/// `None` means "all statuses"
pub fn status_matches<R: ListRecord>(status: Option<ValidationStatus>, record: &R) -> bool {
    match status {
        Some(wanted) => record.validation_status() == Some(wanted),
        None => true,
    }
}

pub fn date_matches<R: ListRecord>(range: Option<&DateRange>, record: &R) -> bool {
    match range {
        Some(range) if range.is_bounded() => range.contains(record.record_date()),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::fixtures::{day, row, Row};

    #[test]
    fn test_contains_is_case_insensitive() {
        let r = row(1, "Alpha Migration", 3, ValidationStatus::Pending);
        assert!(FieldFilter::contains("projectName", "MIGR").matches(&r));
        assert!(!FieldFilter::contains("projectName", "beta").matches(&r));
    }

    #[test]
    fn test_exact_requires_whole_value() {
        let r = row(1, "Alpha", 3, ValidationStatus::Pending);
        assert!(FieldFilter::exact("projectName", "alpha").matches(&r));
        assert!(!FieldFilter::exact("projectName", "alp").matches(&r));
    }

    #[test]
    fn test_empty_value_is_noop() {
        let r = Row { project: None, ..row(1, "Alpha", 3, ValidationStatus::Pending) };
        assert!(FieldFilter::contains("projectName", "").matches(&r));
        assert!(FieldFilter::exact("projectName", "").matches(&r));
    }

    #[test]
    fn test_missing_field_fails_active_filter() {
        let r = Row { project: None, ..row(1, "Alpha", 3, ValidationStatus::Pending) };
        assert!(!FieldFilter::contains("projectName", "a").matches(&r));
        assert!(!FieldFilter::exact("projectName", "alpha").matches(&r));
        assert!(!FieldFilter::contains("unknownField", "a").matches(&r));
    }

    #[test]
    fn test_status_mapping() {
        let validated = row(1, "Alpha", 3, ValidationStatus::Validated);
        let pending = row(2, "Alpha", 3, ValidationStatus::Pending);
        let rejected = row(3, "Alpha", 3, ValidationStatus::Rejected);

        let status = ValidationStatus::from_code("pending");
        assert!(!status_matches(status, &validated));
        assert!(status_matches(status, &pending));
        assert!(!status_matches(status, &rejected));

        assert!(status_matches(None, &rejected));
    }

    #[test]
    fn test_date_predicate() {
        let range = DateRange::between(day(5), day(10));
        let inside = row(1, "Alpha", 10, ValidationStatus::Pending);
        let outside = row(2, "Alpha", 11, ValidationStatus::Pending);
        let undated = Row { date: None, ..inside.clone() };

        assert!(date_matches(Some(&range), &inside));
        assert!(!date_matches(Some(&range), &outside));
        assert!(!date_matches(Some(&range), &undated));
        assert!(date_matches(None, &undated));
        assert!(date_matches(Some(&DateRange::new(Some(day(5)), None)), &undated));
    }
}
