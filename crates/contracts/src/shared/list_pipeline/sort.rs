use super::record::ListRecord;
use std::cmp::Ordering;

/// Secondary key applied to every sort
pub const DATE_FIELD: &str = "date";

/// Column ordering of a list view.
///
/// Ties on the primary column are broken by the record date (ascending), and
/// the sort is stable, so refiltering never shuffles rows that compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Header click: the active column flips direction, another column starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    /// Arrow shown next to a column header
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }

    pub fn compare<R: ListRecord>(&self, a: &R, b: &R) -> Ordering {
        let primary = present_first(
            a.sort_key(&self.field),
            b.sort_key(&self.field),
            |x, y| {
                let cmp = x.compare(y);
                if self.ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            },
        );
        primary.then_with(|| present_first(a.record_date(), b.record_date(), |x, y| x.cmp(y)))
    }
}

/// Missing values sort after present ones whatever the direction
fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort
pub fn sort_records<R: ListRecord>(records: &mut [R], sort: &SortSpec) {
    records.sort_by(|a, b| sort.compare(a, b));
}
