//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_timesheet--list"`) and a `data-page-category` with one of the
//! constants below.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Create/edit form of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Use-case action page (report download).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Login and administration pages.
pub const PAGE_CAT_SYSTEM: &str = "system";
