use super::aggregator::{group_by_day, mark_all_read, mark_read, unread_count, DayGroup};
use super::dto::Notification;

/// Handle for one scheduled mark-all-read.
///
/// Only the most recently issued ticket is live; firing any other one is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkReadTicket(u64);

/// Bell state shared by both navbars.
///
/// Opening the menu arms a ticket; the UI schedules a timer and calls
/// [`NotificationFeed::fire`] when it elapses. Closing the menu or disposing
/// the feed disarms it, so a late timer cannot flip anything.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
    menu_open: bool,
    armed: Option<MarkReadTicket>,
    next_ticket: u64,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fetched list
    pub fn replace(&mut self, items: Vec<Notification>) {
        self.items = items;
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.items)
    }

    pub fn groups(&self) -> Vec<DayGroup> {
        group_by_day(&self.items)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    /// Open the menu. Returns a ticket to schedule when something is unread;
    /// any earlier ticket is superseded.
    pub fn open_menu(&mut self) -> Option<MarkReadTicket> {
        self.menu_open = true;
        if self.unread_count() == 0 {
            self.armed = None;
            return None;
        }
        self.next_ticket += 1;
        let ticket = MarkReadTicket(self.next_ticket);
        self.armed = Some(ticket);
        Some(ticket)
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.armed = None;
    }

    /// Owning component went away
    pub fn dispose(&mut self) {
        self.close_menu();
    }

    /// Timer elapsed. For the live ticket, returns the unread ids that should
    /// be reported to the server; stale tickets yield `None`.
    pub fn fire(&mut self, ticket: MarkReadTicket) -> Option<Vec<i64>> {
        if self.armed != Some(ticket) {
            return None;
        }
        self.armed = None;
        let ids: Vec<i64> = self
            .items
            .iter()
            .filter(|n| !n.is_read)
            .map(|n| n.id)
            .collect();
        if ids.is_empty() {
            None
        } else {
            Some(ids)
        }
    }

    /// Apply the outcome of reporting `requested` to the server.
    ///
    /// Only the `acked` ids flip to read. Returns the requested ids the server
    /// did not take; they stay unread until the next open.
    pub fn confirm_partial(&mut self, requested: &[i64], acked: &[i64]) -> Vec<i64> {
        let everything_acked = self
            .items
            .iter()
            .filter(|n| !n.is_read)
            .all(|n| acked.contains(&n.id));
        self.items = if everything_acked {
            mark_all_read(&self.items)
        } else {
            mark_read(&self.items, acked)
        };
        requested
            .iter()
            .copied()
            .filter(|id| !acked.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unread(n: i64) -> Vec<Notification> {
        (1..=n)
            .map(|id| Notification {
                id,
                message: format!("n{}", id),
                date_created: "2024-01-05T08:00:00".to_string(),
                is_read: false,
            })
            .collect()
    }

    #[test]
    fn test_close_before_delay_keeps_unread() {
        let mut feed = NotificationFeed::new();
        feed.replace(unread(5));
        let ticket = feed.open_menu().unwrap();
        feed.close_menu();
        assert_eq!(feed.fire(ticket), None);
        assert_eq!(feed.unread_count(), 5);
    }

    #[test]
    fn test_fire_then_confirm_marks_all_read() {
        let mut feed = NotificationFeed::new();
        feed.replace(unread(3));
        let ticket = feed.open_menu().unwrap();
        assert!(feed.is_pending());
        let ids = feed.fire(ticket).unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!feed.is_pending());
        assert_eq!(feed.unread_count(), 3);
        assert!(feed.confirm_partial(&ids, &ids).is_empty());
        assert_eq!(feed.unread_count(), 0);
        // Second fire of the same ticket does nothing
        assert_eq!(feed.fire(ticket), None);
    }

    #[test]
    fn test_reopen_supersedes_previous_ticket() {
        let mut feed = NotificationFeed::new();
        feed.replace(unread(2));
        let first = feed.open_menu().unwrap();
        feed.close_menu();
        let second = feed.open_menu().unwrap();
        assert_ne!(first, second);
        assert_eq!(feed.fire(first), None);
        assert!(feed.fire(second).is_some());
    }

    #[test]
    fn test_nothing_unread_schedules_nothing() {
        let mut feed = NotificationFeed::new();
        assert_eq!(feed.open_menu(), None);
        assert!(feed.is_menu_open());
    }

    #[test]
    fn test_dispose_cancels() {
        let mut feed = NotificationFeed::new();
        feed.replace(unread(1));
        let ticket = feed.open_menu().unwrap();
        feed.dispose();
        assert_eq!(feed.fire(ticket), None);
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn test_partial_ack_marks_only_acknowledged() {
        let mut feed = NotificationFeed::new();
        feed.replace(unread(3));
        let ticket = feed.open_menu().unwrap();
        let ids = feed.fire(ticket).unwrap();

        // POST for id 2 failed
        let failed = feed.confirm_partial(&ids, &[1, 3]);
        assert_eq!(failed, vec![2]);
        assert_eq!(feed.unread_count(), 1);
        let still_unread: Vec<i64> =
            feed.items().iter().filter(|n| !n.is_read).map(|n| n.id).collect();
        assert_eq!(still_unread, vec![2]);

        // Next open retries only what is left
        let ticket = feed.open_menu().unwrap();
        assert_eq!(feed.fire(ticket), Some(vec![2]));
    }

    #[test]
    fn test_nothing_acked_changes_nothing() {
        let mut feed = NotificationFeed::new();
        feed.replace(unread(2));
        let failed = feed.confirm_partial(&[1, 2], &[]);
        assert_eq!(failed, vec![1, 2]);
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn test_full_ack_keeps_already_read_entries() {
        let mut feed = NotificationFeed::new();
        let mut items = unread(3);
        items[0].is_read = true;
        feed.replace(items);
        assert!(feed.confirm_partial(&[2, 3], &[2, 3]).is_empty());
        assert_eq!(feed.unread_count(), 0);
        assert_eq!(feed.items().len(), 3);
    }
}
