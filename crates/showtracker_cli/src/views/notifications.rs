//! Notifications screen: unified feed plus monthly digest.

use super::relative_time;
use chrono::{DateTime, Utc};
use showtracker_core::{FeedEntry, FeedKind};
use std::fmt;

pub struct NotificationsView<'a> {
    pub feed: &'a [FeedEntry<'a>],
    pub digest: Option<&'a str>,
    pub now: DateTime<Utc>,
}

impl fmt::Display for NotificationsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Notifications ==")?;

        if self.feed.is_empty() {
            writeln!(f, "  No notifications yet")?;
            writeln!(f, "  Track shows to get release notifications")?;
        }

        for entry in self.feed {
            let when = relative_time(entry.date, self.now);
            match &entry.kind {
                FeedKind::Upcoming { item, days_until } => {
                    writeln!(f, "  [release]  {}", entry.message)?;
                    writeln!(
                        f,
                        "             {} · in {} days · {}",
                        item.kind.label(),
                        days_until,
                        when
                    )?;
                }
                FeedKind::Activity => {
                    writeln!(f, "  [activity] {}", entry.message)?;
                    writeln!(f, "             {when}")?;
                }
            }
        }

        if let Some(digest) = self.digest {
            writeln!(f, "\n== Upcoming This Month ==")?;
            writeln!(f, "  {digest}")?;
        }
        Ok(())
    }
}

pub fn render_notifications(
    feed: &[FeedEntry<'_>],
    digest: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    NotificationsView { feed, digest, now }.to_string()
}
