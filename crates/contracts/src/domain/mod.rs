pub mod a001_timesheet;
pub mod a002_project;
pub mod a003_assignment;
