//! Header notification feed.

use serde::Deserialize;

use crate::config::EmptyNotifications;

/// A single notification row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Notification {
    /// Unique within a feed.
    pub id: String,
    pub text: String,
    /// Relative time label, e.g. "3 min ago".
    pub time: String,
}

/// What the notification dropdown renders below its header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationBody<'a> {
    /// One row per notification, in feed order.
    Entries(&'a [Notification]),
    /// The explicit empty-state message.
    EmptyMessage,
    /// An empty list container.
    Blank,
}

/// Chooses the dropdown body for a feed under the given empty-state policy.
pub fn notification_body(
    items: &[Notification],
    empty_state: EmptyNotifications,
) -> NotificationBody<'_> {
    if !items.is_empty() {
        return NotificationBody::Entries(items);
    }
    match empty_state {
        EmptyNotifications::Message => NotificationBody::EmptyMessage,
        EmptyNotifications::Blank => NotificationBody::Blank,
    }
}

/// The pulsing dot on the bell is shown only for a non-empty feed.
pub fn has_indicator(items: &[Notification]) -> bool {
    !items.is_empty()
}

/// Badge next to the dropdown title, e.g. "3 New".
pub fn badge_label(count: usize) -> String {
    format!("{} New", count)
}
