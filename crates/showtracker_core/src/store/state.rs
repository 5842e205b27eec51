//! Store state value and its persisted JSON form.
//!
//! # Responsibility
//! - Hold the three collections as one value that can be cloned and compared.
//! - Encode to, and leniently decode from, the persisted blob.
//!
//! # Invariants
//! - Decoding never fails: each top-level field recovers independently.
//! - Decoded state satisfies the move-semantics invariant (see `normalize`).

use crate::model::content::{ContentId, ContentItem};
use crate::model::notification::Notification;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Snapshot of the three store collections.
///
/// Serializes as `{"watched": [...], "tracking": [...], "notifications": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingState {
    #[serde(default)]
    watched: Vec<ContentItem>,
    #[serde(default)]
    tracking: Vec<ContentItem>,
    #[serde(default)]
    notifications: Vec<Notification>,
}

/// How one top-level field was recovered while decoding a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRecovery {
    Loaded,
    Missing,
    Malformed,
}

/// Outcome details of [`TrackingState::decode_lenient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    pub blob_valid: bool,
    pub watched: FieldRecovery,
    pub tracking: FieldRecovery,
    pub notifications: FieldRecovery,
    /// Entries dropped to restore uniqueness and mutual exclusion.
    pub dropped_entries: usize,
}

impl DecodeReport {
    /// True when nothing had to be discarded.
    pub fn is_clean(&self) -> bool {
        self.blob_valid
            && self.dropped_entries == 0
            && ![self.watched, self.tracking, self.notifications]
                .contains(&FieldRecovery::Malformed)
    }

    fn invalid_blob() -> Self {
        Self {
            blob_valid: false,
            watched: FieldRecovery::Malformed,
            tracking: FieldRecovery::Malformed,
            notifications: FieldRecovery::Malformed,
            dropped_entries: 0,
        }
    }
}

impl TrackingState {
    pub fn watched(&self) -> &[ContentItem] {
        &self.watched
    }

    pub fn tracking(&self) -> &[ContentItem] {
        &self.tracking
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_watched(&self, id: &str) -> bool {
        self.watched.iter().any(|item| item.id == id)
    }

    pub fn is_tracking(&self, id: &str) -> bool {
        self.tracking.iter().any(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty() && self.tracking.is_empty() && self.notifications.is_empty()
    }

    pub(crate) fn push_watched(&mut self, item: ContentItem) {
        self.watched.push(item);
    }

    pub(crate) fn push_tracking(&mut self, item: ContentItem) {
        self.tracking.push(item);
    }

    pub(crate) fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Removes `id` from `watched`; returns whether anything was removed.
    pub(crate) fn drop_watched(&mut self, id: &str) -> bool {
        let before = self.watched.len();
        self.watched.retain(|item| item.id != id);
        self.watched.len() != before
    }

    /// Removes `id` from `tracking`; returns whether anything was removed.
    pub(crate) fn drop_tracking(&mut self, id: &str) -> bool {
        let before = self.tracking.len();
        self.tracking.retain(|item| item.id != id);
        self.tracking.len() != before
    }

    /// Serializes to the persisted JSON object.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes a persisted blob, substituting empty collections for any
    /// field that is missing or has the wrong shape.
    pub fn decode_lenient(raw: &str) -> (Self, DecodeReport) {
        let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(raw) else {
            return (Self::default(), DecodeReport::invalid_blob());
        };

        let (watched, watched_recovery) = take_field(&mut fields, "watched");
        let (tracking, tracking_recovery) = take_field(&mut fields, "tracking");
        let (notifications, notifications_recovery) = take_field(&mut fields, "notifications");

        let mut state = Self {
            watched,
            tracking,
            notifications,
        };
        let dropped_entries = state.normalize();

        let report = DecodeReport {
            blob_valid: true,
            watched: watched_recovery,
            tracking: tracking_recovery,
            notifications: notifications_recovery,
            dropped_entries,
        };
        (state, report)
    }

    /// Restores collection invariants on externally sourced data.
    ///
    /// Keeps the first entry per id in each collection. An id present in
    /// both collections stays in `watched` and leaves `tracking`.
    /// Returns how many entries were dropped.
    fn normalize(&mut self) -> usize {
        let before = self.watched.len() + self.tracking.len();

        let mut watched_ids: HashSet<ContentId> = HashSet::new();
        self.watched.retain(|item| watched_ids.insert(item.id.clone()));

        let mut tracking_ids: HashSet<ContentId> = HashSet::new();
        self.tracking.retain(|item| {
            !watched_ids.contains(&item.id) && tracking_ids.insert(item.id.clone())
        });

        before - (self.watched.len() + self.tracking.len())
    }
}

fn take_field<T: DeserializeOwned>(
    fields: &mut serde_json::Map<String, Value>,
    name: &str,
) -> (Vec<T>, FieldRecovery) {
    match fields.remove(name) {
        None | Some(Value::Null) => (Vec::new(), FieldRecovery::Missing),
        Some(value) => match serde_json::from_value::<Vec<T>>(value) {
            Ok(items) => (items, FieldRecovery::Loaded),
            Err(_) => (Vec::new(), FieldRecovery::Malformed),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldRecovery, TrackingState};
    use crate::model::content::{ContentItem, ContentType};

    fn item(id: &str) -> ContentItem {
        ContentItem::new(id, format!("Title {id}"), ContentType::Movie, "2030-01-01")
    }

    #[test]
    fn decode_of_garbage_yields_empty_state() {
        let (state, report) = TrackingState::decode_lenient("{not json");
        assert!(state.is_empty());
        assert!(!report.blob_valid);
        assert!(!report.is_clean());

        let (state, report) = TrackingState::decode_lenient("[1, 2, 3]");
        assert!(state.is_empty());
        assert!(!report.blob_valid);
    }

    #[test]
    fn decode_recovers_each_field_independently() {
        let raw = serde_json::json!({
            "watched": [item("w1")],
            "tracking": "not-a-list",
        })
        .to_string();

        let (state, report) = TrackingState::decode_lenient(&raw);

        assert_eq!(state.watched(), &[item("w1")]);
        assert!(state.tracking().is_empty());
        assert!(state.notifications().is_empty());
        assert_eq!(report.watched, FieldRecovery::Loaded);
        assert_eq!(report.tracking, FieldRecovery::Malformed);
        assert_eq!(report.notifications, FieldRecovery::Missing);
    }

    #[test]
    fn decode_restores_uniqueness_and_exclusion() {
        let raw = serde_json::json!({
            "watched": [item("a"), item("a")],
            "tracking": [item("a"), item("b"), item("b")],
            "notifications": [],
        })
        .to_string();

        let (state, report) = TrackingState::decode_lenient(&raw);

        assert_eq!(state.watched(), &[item("a")]);
        assert_eq!(state.tracking(), &[item("b")]);
        assert_eq!(report.dropped_entries, 3);
    }

    #[test]
    fn drop_helpers_report_changes() {
        let mut state = TrackingState::default();
        state.push_watched(item("a"));
        assert!(state.drop_watched("a"));
        assert!(!state.drop_watched("a"));
        assert!(!state.drop_tracking("a"));
    }
}
