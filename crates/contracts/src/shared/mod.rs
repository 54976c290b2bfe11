pub mod dates;
pub mod lenient;
pub mod list_pipeline;
