use chrono::{Duration, TimeZone, Utc};
use showtracker_core::{
    Clock, ContentItem, ContentStatus, ContentType, FixedClock, MemoryStateStorage, TrackingStore,
};

fn fixed_store() -> TrackingStore<MemoryStateStorage, FixedClock> {
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
    TrackingStore::open_with_clock(MemoryStateStorage::new(), FixedClock::new(now))
}

fn movie(id: &str, release_date: &str) -> ContentItem {
    ContentItem::new(id, format!("Movie {id}"), ContentType::Movie, release_date)
}

#[test]
fn add_to_watched_marks_watched_and_not_tracking() {
    let mut store = fixed_store();
    let item = movie("m1", "2030-01-01");

    store.add_to_watched(&item).unwrap();

    assert!(store.is_watched("m1"));
    assert!(!store.is_tracking("m1"));
    assert_eq!(store.state().watched()[0].status, Some(ContentStatus::Watched));
    assert!(store.state().notifications().is_empty());
}

#[test]
fn add_to_tracking_marks_tracking_and_appends_one_notification() {
    let mut store = fixed_store();
    let item = movie("m1", "2030-01-01");
    let now = store.clock().now();

    store.add_to_tracking(&item).unwrap();

    assert!(store.is_tracking("m1"));
    assert!(!store.is_watched("m1"));
    let notifications = store.state().notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].id,
        format!("m1-{}", now.timestamp_millis())
    );
    assert_eq!(notifications[0].message, "Started tracking Movie m1");
    assert_eq!(notifications[0].date, now);
}

#[test]
fn repeated_adds_are_idempotent() {
    let mut store = fixed_store();
    let item = movie("m1", "2030-01-01");

    store.add_to_watched(&item).unwrap();
    let once = store.snapshot();
    store.add_to_watched(&item).unwrap();
    assert_eq!(store.snapshot(), once);

    let mut store = fixed_store();
    store.add_to_tracking(&item).unwrap();
    store.clock().advance(Duration::minutes(5));
    store.add_to_tracking(&item).unwrap();
    assert_eq!(store.state().tracking().len(), 1);
    assert_eq!(store.state().notifications().len(), 1);
}

#[test]
fn track_then_watch_moves_item() {
    let mut store = fixed_store();
    let m1 = movie("m1", "2030-01-01");

    store.add_to_tracking(&m1).unwrap();
    assert_eq!(store.state().tracking().len(), 1);
    assert_eq!(store.state().tracking()[0].id, "m1");
    assert_eq!(store.state().notifications().len(), 1);

    store.add_to_watched(&m1).unwrap();
    assert_eq!(store.state().watched().len(), 1);
    assert_eq!(store.state().watched()[0].id, "m1");
    assert!(store.state().tracking().is_empty());
    assert_eq!(store.state().notifications().len(), 1);
}

#[test]
fn watch_then_track_moves_item_back() {
    let mut store = fixed_store();
    let m1 = movie("m1", "2030-01-01");

    store.add_to_watched(&m1).unwrap();
    store.add_to_tracking(&m1).unwrap();

    assert!(store.state().watched().is_empty());
    assert_eq!(store.state().tracking()[0].status, Some(ContentStatus::Tracking));
}

#[test]
fn removals_are_unconditional_and_silent() {
    let mut store = fixed_store();
    let m1 = movie("m1", "2030-01-01");
    store.add_to_tracking(&m1).unwrap();

    store.remove_from_tracking("m1").unwrap();
    store.remove_from_tracking("m1").unwrap();
    store.remove_from_watched("never-added").unwrap();

    assert!(!store.is_tracking("m1"));
    assert_eq!(store.state().notifications().len(), 1);
}

#[test]
fn ids_never_sit_in_both_collections() {
    let mut store = fixed_store();
    let ids = ["a", "b", "c", "d"];

    // Deterministic pseudo-random walk over all operations.
    let mut seed: u64 = 0x5eed;
    for step in 0..400 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let id = ids[(seed >> 33) as usize % ids.len()];
        let item = movie(id, "2030-01-01");
        match (seed >> 40) % 4 {
            0 => store.add_to_watched(&item).unwrap(),
            1 => store.add_to_tracking(&item).unwrap(),
            2 => store.remove_from_watched(id).unwrap(),
            _ => store.remove_from_tracking(id).unwrap(),
        };
        store.clock().advance(Duration::seconds(1));

        for id in ids {
            assert!(
                !(store.is_watched(id) && store.is_tracking(id)),
                "id {id} in both collections after step {step}"
            );
        }
        let state = store.state();
        for collection in [state.watched(), state.tracking()] {
            let mut seen: Vec<&str> = collection.iter().map(|item| item.id.as_str()).collect();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), collection.len());
        }
    }
}

#[test]
fn notification_titles_are_captured_at_track_time() {
    let mut store = fixed_store();
    let mut item = movie("m1", "2030-01-01");
    store.add_to_tracking(&item).unwrap();
    store.remove_from_tracking("m1").unwrap();

    item.title = "Renamed".to_string();
    store.clock().advance(Duration::seconds(1));
    store.add_to_tracking(&item).unwrap();

    let messages: Vec<&str> = store
        .state()
        .notifications()
        .iter()
        .map(|notification| notification.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec!["Started tracking Movie m1", "Started tracking Renamed"]
    );
}
