use super::predicate::{date_matches, status_matches, FieldFilter, MatchMode};
use super::record::ListRecord;
use crate::enums::ValidationStatus;
use crate::shared::dates::DateRange;

/// Active filter selections of one list view.
///
/// Holds at most one text filter per field; setting a field again replaces
/// its previous value. All active parts are ANDed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    fields: Vec<FieldFilter>,
    pub status: Option<ValidationStatus>,
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contains(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set_field(field, MatchMode::Contains, value);
        self
    }

    pub fn with_exact(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set_field(field, MatchMode::Exact, value);
        self
    }

    pub fn with_status(mut self, status: Option<ValidationStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn set_field(&mut self, field: &str, mode: MatchMode, value: impl Into<String>) {
        let filter = FieldFilter::new(field, mode, value);
        match self.fields.iter_mut().find(|f| f.field() == field) {
            Some(existing) => *existing = filter,
            None => self.fields.push(filter),
        }
    }

    pub fn clear_field(&mut self, field: &str) {
        self.fields.retain(|f| f.field() != field);
    }

    /// Current value of a field filter, empty when unset
    pub fn field_value(&self, field: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.field() == field)
            .map(|f| f.value())
            .unwrap_or("")
    }

    pub fn fields(&self) -> &[FieldFilter] {
        &self.fields
    }

    /// Number of filters that currently narrow the list (filter panel badge)
    pub fn active_count(&self) -> usize {
        let fields = self.fields.iter().filter(|f| f.is_active()).count();
        let status = usize::from(self.status.is_some());
        let dates = usize::from(self.date_range.map_or(false, |r| r.is_bounded()));
        fields + status + dates
    }

    pub fn matches<R: ListRecord>(&self, record: &R) -> bool {
        self.fields.iter().all(|f| f.matches(record))
            && status_matches(self.status, record)
            && date_matches(self.date_range.as_ref(), record)
    }
}

/// Records matching every active criterion, in their original order
pub fn filter_records<R: ListRecord + Clone>(records: &[R], criteria: &FilterCriteria) -> Vec<R> {
    records
        .iter()
        .filter(|r| criteria.matches(*r))
        .cloned()
        .collect()
}

/// Distinct non-empty values of a field in first-seen order (dropdown options)
pub fn distinct_values<R: ListRecord>(records: &[R], field: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in records.iter().filter_map(|r| r.text_field(field)) {
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::fixtures::{day, row, Row};
    use ValidationStatus::*;

    fn sample() -> Vec<Row> {
        vec![
            row(1, "Beta", 4, Pending),
            row(2, "Alpha", 9, Validated),
            row(3, "Alpha", 2, Pending),
            Row { user: Some("bob"), ..row(4, "Gamma", 5, Rejected) },
            row(5, "alpha", 7, Pending),
            Row { project: None, ..row(6, "x", 7, Pending) },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let records = sample();
        assert_eq!(filter_records(&records, &FilterCriteria::new()), records);
    }

    #[test]
    fn test_project_and_pending_preserve_original_order() {
        let criteria = FilterCriteria::new()
            .with_exact("projectName", "Alpha")
            .with_status(ValidationStatus::from_code("pending"));
        assert_eq!(ids(&filter_records(&sample(), &criteria)), vec![3, 5]);
    }

    #[test]
    fn test_all_predicates_combined() {
        let criteria = FilterCriteria::new()
            .with_contains("projectName", "a")
            .with_contains("userName", "ALI")
            .with_status(Some(Pending))
            .with_date_range(DateRange::between(day(3), day(8)));
        assert_eq!(ids(&filter_records(&sample(), &criteria)), vec![1, 5]);
    }

    #[test]
    fn test_filter_is_subset_and_idempotent() {
        let records = sample();
        let criteria = FilterCriteria::new()
            .with_contains("projectName", "al")
            .with_date_range(DateRange::between(day(1), day(8)));
        let once = filter_records(&records, &criteria);
        assert!(once.iter().all(|r| records.contains(r)));
        assert_eq!(filter_records(&once, &criteria), once);
    }

    #[test]
    fn test_evaluation_order_does_not_matter() {
        let a = FilterCriteria::new()
            .with_contains("userName", "a")
            .with_exact("projectName", "alpha");
        let b = FilterCriteria::new()
            .with_exact("projectName", "alpha")
            .with_contains("userName", "a");
        assert_eq!(filter_records(&sample(), &a), filter_records(&sample(), &b));
    }

    #[test]
    fn test_setting_a_field_replaces_it() {
        let mut criteria = FilterCriteria::new().with_contains("projectName", "beta");
        criteria.set_field("projectName", MatchMode::Contains, "gam");
        assert_eq!(criteria.fields().len(), 1);
        assert_eq!(criteria.field_value("projectName"), "gam");
        assert_eq!(ids(&filter_records(&sample(), &criteria)), vec![4]);

        criteria.clear_field("projectName");
        assert_eq!(criteria.field_value("projectName"), "");
    }

    #[test]
    fn test_active_count() {
        let criteria = FilterCriteria::new()
            .with_contains("projectName", "")
            .with_contains("userName", "bob")
            .with_status(Some(Rejected))
            .with_date_range(DateRange::new(Some(day(1)), None));
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        assert_eq!(
            distinct_values(&sample(), "projectName"),
            vec!["Beta", "Alpha", "Gamma", "alpha"]
        );
    }
}
