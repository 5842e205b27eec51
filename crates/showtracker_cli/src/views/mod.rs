//! Text views over store state.
//!
//! # Responsibility
//! - Render home, search, calendar and notification screens as plain text.
//! - Stay side-effect free: each screen is a `Display` type rendered to a `String`.

pub mod calendar;
pub mod card;
pub mod home;
pub mod notifications;
pub mod search;

use chrono::{DateTime, Utc};

/// Humanized distance between `date` and `now`, e.g. `3 days ago`, `in 2 hours`.
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = date.signed_duration_since(now);
    let future = delta.num_seconds() > 0;
    let delta = delta.abs();
    if delta.num_seconds() < 45 {
        return "just now".to_string();
    }

    let phrase = if delta.num_minutes() < 60 {
        plural(delta.num_minutes().max(1), "minute")
    } else if delta.num_hours() < 24 {
        plural(delta.num_hours(), "hour")
    } else if delta.num_days() < 30 {
        plural(delta.num_days(), "day")
    } else if delta.num_days() < 365 {
        plural(delta.num_days() / 30, "month")
    } else {
        plural(delta.num_days() / 365, "year")
    };

    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::relative_time;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn relative_time_covers_past_and_future() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(relative_time(now + Duration::days(3), now), "in 3 days");
        assert_eq!(relative_time(now - Duration::days(800), now), "2 years ago");
    }
}
