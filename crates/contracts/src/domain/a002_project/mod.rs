pub mod dto;

pub use dto::{Project, UserProject};
