pub mod role;
pub mod validation_status;

pub use role::Role;
pub use validation_status::ValidationStatus;
