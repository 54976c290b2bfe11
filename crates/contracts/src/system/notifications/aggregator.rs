use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::dto::Notification;

/// Notifications created on one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    /// `None` collects notifications whose timestamp could not be parsed
    pub day: Option<NaiveDate>,
    pub items: Vec<Notification>,
}

/// Group by creation day.
///
/// Days come out in chronological order, undated notifications last; inside a
/// day the fetch order is kept.
pub fn group_by_day(notifications: &[Notification]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for notification in notifications {
        let day = notification.created_at().map(|ts| ts.date());
        match groups.iter_mut().find(|g| g.day == day) {
            Some(group) => group.items.push(notification.clone()),
            None => groups.push(DayGroup {
                day,
                items: vec![notification.clone()],
            }),
        }
    }
    // Stable: only the day order changes
    groups.sort_by_key(|g| (g.day.is_none(), g.day));
    groups
}

/// "il y a 12 min" under an hour, "il y a 5 h" under a day, otherwise the
/// time of day. Timestamps in the future count as just now.
pub fn format_relative(timestamp: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let hours = elapsed.num_hours();
    if hours < 1 {
        format!("il y a {} min", elapsed.num_minutes().max(0))
    } else if hours < 24 {
        format!("il y a {} h", hours)
    } else {
        timestamp.format("%H:%M").to_string()
    }
}

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

/// Group heading, e.g. "5 janvier 2024"
pub fn format_day_heading(day: NaiveDate) -> String {
    format!("{} {} {}", day.day(), MONTHS_FR[day.month0() as usize], day.year())
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Copy with the given ids flagged as read; already-read entries stay read
pub fn mark_read(notifications: &[Notification], ids: &[i64]) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| Notification {
            is_read: n.is_read || ids.contains(&n.id),
            ..n.clone()
        })
        .collect()
}

pub fn mark_all_read(notifications: &[Notification]) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| Notification {
            is_read: true,
            ..n.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::parse_timestamp;
    use chrono::Duration;

    fn notification(id: i64, created: &str, is_read: bool) -> Notification {
        Notification {
            id,
            message: format!("message {}", id),
            date_created: created.to_string(),
            is_read,
        }
    }

    fn ts(value: &str) -> NaiveDateTime {
        parse_timestamp(value).unwrap()
    }

    #[test]
    fn test_same_day_forms_one_group_in_original_order() {
        let items = vec![
            notification(1, "2024-01-05T23:00", false),
            notification(2, "2024-01-05T08:00", false),
        ];
        let groups = group_by_day(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].day, NaiveDate::from_ymd_opt(2024, 1, 5));
        let ids: Vec<i64> = groups[0].items.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_days_are_chronological_and_undated_last() {
        let items = vec![
            notification(1, "bad", false),
            notification(2, "2024-01-07T10:00:00", false),
            notification(3, "2024-01-05T10:00:00", false),
            notification(4, "2024-01-07T09:00:00", true),
        ];
        let groups = group_by_day(&items);
        let days: Vec<Option<NaiveDate>> = groups.iter().map(|g| g.day).collect();
        assert_eq!(
            days,
            vec![NaiveDate::from_ymd_opt(2024, 1, 5), NaiveDate::from_ymd_opt(2024, 1, 7), None]
        );
        let ids: Vec<i64> = groups[1].items.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_format_relative_thresholds() {
        let created = ts("2024-01-05T08:15:00");
        assert_eq!(format_relative(created, created + Duration::minutes(30)), "il y a 30 min");
        assert_eq!(format_relative(created, created + Duration::minutes(59)), "il y a 59 min");
        assert_eq!(format_relative(created, created + Duration::minutes(90)), "il y a 1 h");
        assert_eq!(format_relative(created, created + Duration::hours(23)), "il y a 23 h");
        assert_eq!(format_relative(created, created + Duration::hours(30)), "08:15");
        assert_eq!(format_relative(created, created - Duration::minutes(5)), "il y a 0 min");
    }

    #[test]
    fn test_day_heading() {
        assert_eq!(format_day_heading(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "5 janvier 2024");
        assert_eq!(format_day_heading(NaiveDate::from_ymd_opt(2023, 8, 31).unwrap()), "31 août 2023");
    }

    #[test]
    fn test_mark_all_read_zeroes_unread_count() {
        let items = vec![
            notification(1, "2024-01-05T08:00", false),
            notification(2, "2024-01-05T09:00", true),
            notification(3, "2024-01-06T09:00", false),
        ];
        assert_eq!(unread_count(&items), 2);
        let read = mark_all_read(&items);
        assert_eq!(unread_count(&read), 0);
        assert_eq!(unread_count(&items), 2);
    }

    #[test]
    fn test_mark_read_is_monotonic() {
        let items = vec![notification(1, "x", true), notification(2, "x", false)];
        let read = mark_read(&items, &[2]);
        assert!(read.iter().all(|n| n.is_read));
        let again = mark_read(&read, &[]);
        assert!(again.iter().all(|n| n.is_read));
    }
}
