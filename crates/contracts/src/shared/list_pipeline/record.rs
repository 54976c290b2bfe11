use crate::enums::ValidationStatus;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Comparable value a record exposes for one sortable column
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Already lower-cased
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Flag(bool),
}

impl SortKey {
    /// Case-insensitive text key
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    /// Total order. Numbers use IEEE total ordering (NaN after every finite
    /// value); keys of different kinds order by kind: text, number, date, flag.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Flag(a), SortKey::Flag(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
            SortKey::Flag(_) => 3,
        }
    }
}

/// A row that can flow through the list pipeline.
///
/// Fields are addressed by their wire names (`projectName`, `userName`, ...).
/// A field the record does not have, or whose value is missing, returns
/// `None`; active predicates treat that as a mismatch and sorting puts it last.
pub trait ListRecord {
    type Id: PartialEq + Clone;

    fn record_id(&self) -> &Self::Id;

    fn text_field(&self, field: &str) -> Option<&str>;

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        self.text_field(field).map(SortKey::text)
    }

    fn record_date(&self) -> Option<NaiveDate> {
        None
    }

    fn validation_status(&self) -> Option<ValidationStatus> {
        None
    }
}
