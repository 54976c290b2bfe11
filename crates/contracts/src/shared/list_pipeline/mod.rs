//! Filter → sort → paginate pipeline shared by every list screen.
//!
//! Lists fetch their whole collection once and do all of the narrowing on the
//! client. Each screen only describes its records through [`ListRecord`]; the
//! predicates, ordering and page window are the same everywhere.

pub mod filter;
pub mod pagination;
pub mod predicate;
pub mod record;
pub mod sort;
pub mod state;
pub mod view_model;

pub use filter::{distinct_values, filter_records, FilterCriteria};
pub use pagination::{paginate, PageWindow};
pub use predicate::{FieldFilter, MatchMode};
pub use record::{ListRecord, SortKey};
pub use sort::{sort_records, SortSpec, DATE_FIELD};
pub use state::ListState;
pub use view_model::{build_view_model, ListViewModel};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::record::{ListRecord, SortKey};
    use crate::enums::ValidationStatus;
    use chrono::NaiveDate;

    /// Minimal record used by the pipeline tests
    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: u32,
        pub project: Option<&'static str>,
        pub user: Option<&'static str>,
        pub date: Option<NaiveDate>,
        pub status: ValidationStatus,
        pub hours: f64,
    }

    impl ListRecord for Row {
        type Id = u32;

        fn record_id(&self) -> &u32 {
            &self.id
        }

        fn text_field(&self, field: &str) -> Option<&str> {
            match field {
                "projectName" => self.project,
                "userName" => self.user,
                _ => None,
            }
        }

        fn sort_key(&self, field: &str) -> Option<SortKey> {
            match field {
                "date" => self.date.map(SortKey::Date),
                "hoursWorked" => Some(SortKey::Number(self.hours)),
                _ => self.text_field(field).map(SortKey::text),
            }
        }

        fn record_date(&self) -> Option<NaiveDate> {
            self.date
        }

        fn validation_status(&self) -> Option<ValidationStatus> {
            Some(self.status)
        }
    }

    pub fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    pub fn row(id: u32, project: &'static str, d: u32, status: ValidationStatus) -> Row {
        Row {
            id,
            project: Some(project),
            user: Some("alice"),
            date: Some(day(d)),
            status,
            hours: 8.0,
        }
    }
}
