pub mod admin_list;
pub mod details;
pub mod list;
