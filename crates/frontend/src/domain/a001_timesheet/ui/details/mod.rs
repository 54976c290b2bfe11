//! Timesheet create/edit form.
//!
//! - view_model.rs: form signals and commands (load, project change, save)
//! - view.rs: the form and its two routed pages

mod view;
mod view_model;

pub use view::{TimesheetCreatePage, TimesheetEditPage};
