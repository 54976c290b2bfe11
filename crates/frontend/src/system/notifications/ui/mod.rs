pub mod bell;

pub use bell::NotificationBell;
