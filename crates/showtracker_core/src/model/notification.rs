//! Activity notification record.
//!
//! # Invariants
//! - Notifications are immutable once created; the log is append-only.
//! - `id` is derived from the content id and creation time in epoch millis.

use crate::model::content::ContentItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the activity log.
///
/// `date` serializes as an RFC 3339 UTC timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

impl Notification {
    /// Builds the notification emitted when `item` starts being tracked.
    ///
    /// The title is captured at call time and never refreshed afterwards.
    pub fn started_tracking(item: &ContentItem, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("{}-{}", item.id, now.timestamp_millis()),
            message: format!("Started tracking {}", item.title),
            date: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Notification;
    use crate::model::content::{ContentItem, ContentType};
    use chrono::{TimeZone, Utc};

    #[test]
    fn started_tracking_derives_id_and_message() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let item = ContentItem::new("tt0903747", "Breaking Bad", ContentType::Tv, "2008-01-20");

        let notification = Notification::started_tracking(&item, now);

        assert_eq!(
            notification.id,
            format!("tt0903747-{}", now.timestamp_millis())
        );
        assert_eq!(notification.message, "Started tracking Breaking Bad");
        assert_eq!(notification.date, now);
    }

    #[test]
    fn date_serializes_as_rfc3339() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let item = ContentItem::new("m1", "Movie One", ContentType::Movie, "2030-01-01");
        let json = serde_json::to_value(Notification::started_tracking(&item, now)).unwrap();
        assert_eq!(json["date"], "2026-10-17T12:00:00Z");
    }
}
