pub mod dto;
pub mod form;

pub use dto::Timesheet;
pub use form::{TimesheetForm, TimesheetPayload};
