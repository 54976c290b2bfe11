pub mod dto;

pub use dto::Assignment;
