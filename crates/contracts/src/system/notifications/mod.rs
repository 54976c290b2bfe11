//! Notification bell: day grouping, relative timestamps and the deferred
//! mark-as-read flow.

pub mod aggregator;
pub mod dto;
pub mod feed;

pub use aggregator::{format_day_heading, format_relative, group_by_day, mark_all_read, unread_count, DayGroup};
pub use dto::{Notification, NotificationScope};
pub use feed::{MarkReadTicket, NotificationFeed};
