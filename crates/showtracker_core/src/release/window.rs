//! Upcoming-window queries and the unified notification feed.

use crate::model::content::ContentItem;
use crate::model::notification::Notification;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Default horizon of the upcoming window, in days.
pub const DEFAULT_UPCOMING_DAYS: i64 = 30;

/// Default number of entries in the release schedule list.
pub const DEFAULT_SCHEDULE_LIMIT: usize = 10;

/// A tracked item inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingRelease<'a> {
    pub item: &'a ContentItem,
    pub release_day: NaiveDate,
    /// Midnight of `release_day` in the zone of the query.
    pub release_at: DateTime<Utc>,
    /// Whole days between now and the release instant (truncated).
    pub days_until: i64,
}

/// Kind of an entry in the unified feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedKind<'a> {
    Upcoming {
        item: &'a ContentItem,
        days_until: i64,
    },
    Activity,
}

/// One row of the notifications view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry<'a> {
    pub id: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub kind: FeedKind<'a>,
}

/// Groups items by parsed release day. Undated items are left out.
pub fn group_by_release_day(items: &[ContentItem]) -> BTreeMap<NaiveDate, Vec<&ContentItem>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&ContentItem>> = BTreeMap::new();
    for item in items {
        if let Some(day) = item.release_day() {
            by_day.entry(day).or_default().push(item);
        }
    }
    by_day
}

/// Items releasing strictly after `now` and at most `window_days` whole days
/// ahead, ascending by release day (ties keep input order).
///
/// A release day starts at local midnight in `now`'s zone.
pub fn upcoming_releases<'a, Tz: TimeZone>(
    items: &'a [ContentItem],
    now: &DateTime<Tz>,
    window_days: i64,
) -> Vec<UpcomingRelease<'a>> {
    let zone = now.timezone();
    let mut upcoming: Vec<UpcomingRelease<'a>> = items
        .iter()
        .filter_map(|item| {
            let release_day = item.release_day()?;
            let release_at = release_instant(release_day, &zone);
            if release_at <= *now {
                return None;
            }
            let days_until = (release_at.clone() - now.clone()).num_days();
            (days_until <= window_days).then(|| UpcomingRelease {
                item,
                release_day,
                release_at: release_at.with_timezone(&Utc),
                days_until,
            })
        })
        .collect();
    upcoming.sort_by_key(|release| release.release_day);
    upcoming
}

/// Digest line shown above the feed, or `None` when nothing is upcoming.
pub fn monthly_digest(upcoming_count: usize, window_days: i64) -> Option<String> {
    if upcoming_count == 0 {
        return None;
    }
    let plural = if upcoming_count == 1 { "" } else { "s" };
    Some(format!(
        "You have {upcoming_count} show{plural} releasing in the next {window_days} days"
    ))
}

/// Merges upcoming releases with the activity log, newest date first.
pub fn unified_feed<'a>(
    upcoming: &[UpcomingRelease<'a>],
    notifications: &[Notification],
) -> Vec<FeedEntry<'a>> {
    let mut feed: Vec<FeedEntry<'a>> = upcoming
        .iter()
        .map(|release| FeedEntry {
            id: format!("upcoming-{}", release.item.id),
            message: format!("{} releases soon", release.item.title),
            date: release.release_at,
            kind: FeedKind::Upcoming {
                item: release.item,
                days_until: release.days_until,
            },
        })
        .chain(notifications.iter().map(|notification| FeedEntry {
            id: notification.id.clone(),
            message: notification.message.clone(),
            date: notification.date,
            kind: FeedKind::Activity,
        }))
        .collect();
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed
}

/// Items ordered by release day ascending, undated last, capped at `limit`.
pub fn release_schedule(items: &[ContentItem], limit: usize) -> Vec<&ContentItem> {
    let mut ordered: Vec<(Option<NaiveDate>, &ContentItem)> =
        items.iter().map(|item| (item.release_day(), item)).collect();
    ordered.sort_by(|(a, _), (b, _)| compare_release_days(*a, *b));
    ordered.into_iter().take(limit).map(|(_, item)| item).collect()
}

fn compare_release_days(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Start of `day` in `zone`.
///
/// A midnight skipped by a DST jump falls back to midnight UTC.
pub fn release_instant<Tz: TimeZone>(day: NaiveDate, zone: &Tz) -> DateTime<Tz> {
    let midnight = day.and_time(NaiveTime::MIN);
    zone.from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| zone.from_utc_datetime(&midnight))
}
