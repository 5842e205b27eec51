//! Tracking store: mutation and query API over `TrackingState`.
//!
//! # Responsibility
//! - Apply watched/tracking moves with idempotent semantics.
//! - Append one activity notification per successful track action.
//! - Persist each committed state through `StateStorage`.
//!
//! # Invariants
//! - No-op calls neither write storage nor notify subscribers.
//! - A failed write leaves in-memory state untouched.
//! - Hydration never fails; unreadable storage yields an empty store.

use crate::model::content::{ContentItem, ContentStatus};
use crate::model::notification::Notification;
use crate::storage::kv::{StateStorage, StorageError};
use crate::store::clock::{Clock, SystemClock};
use crate::store::state::TrackingState;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the persisted store blob.
pub const STATE_KEY: &str = "showtracker_data";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned when a state transition cannot be committed.
#[derive(Debug)]
pub enum StoreError {
    Encode(serde_json::Error),
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode store state: {err}"),
            Self::Storage(err) => write!(f, "failed to persist store state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Callback invoked with the new state after each committed change.
pub type StateListener = Box<dyn FnMut(&TrackingState)>;

/// Handle returned by [`TrackingStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// Session-wide tracking store with write-through persistence.
pub struct TrackingStore<S: StateStorage, C: Clock = SystemClock> {
    state: TrackingState,
    storage: S,
    clock: C,
    listeners: Vec<(SubscriptionId, StateListener)>,
    next_subscription: usize,
}

impl<S: StateStorage> TrackingStore<S, SystemClock> {
    /// Hydrates a store from `storage` using wall-clock time.
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: StateStorage, C: Clock> TrackingStore<S, C> {
    /// Hydrates a store from `storage` with an explicit time source.
    ///
    /// Missing, unreadable or malformed persisted data degrades to empty
    /// collections (per field) and is logged, never returned.
    pub fn open_with_clock(storage: S, clock: C) -> Self {
        let state = hydrate(&storage);
        Self {
            state,
            storage,
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> TrackingState {
        self.state.clone()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_watched(&self, id: &str) -> bool {
        self.state.is_watched(id)
    }

    pub fn is_tracking(&self, id: &str) -> bool {
        self.state.is_tracking(id)
    }

    /// Registers a listener called after every committed change.
    pub fn subscribe(&mut self, listener: impl FnMut(&TrackingState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Marks `item` as watched and moves it out of `tracking`.
    ///
    /// No-op when the id is already watched.
    pub fn add_to_watched(&mut self, item: &ContentItem) -> StoreResult<&TrackingState> {
        if self.state.is_watched(&item.id) {
            debug!("event=store_add_watched module=store status=noop reason=duplicate");
            return Ok(&self.state);
        }

        let mut next = self.state.clone();
        next.push_watched(item.with_status(ContentStatus::Watched));
        next.drop_tracking(&item.id);
        self.commit(next, "add_watched")
    }

    /// Starts tracking `item`, moves it out of `watched` and logs a
    /// `Started tracking <title>` notification.
    ///
    /// No-op (and no notification) when the id is already tracked.
    pub fn add_to_tracking(&mut self, item: &ContentItem) -> StoreResult<&TrackingState> {
        if self.state.is_tracking(&item.id) {
            debug!("event=store_add_tracking module=store status=noop reason=duplicate");
            return Ok(&self.state);
        }

        let now = self.clock.now();
        let mut next = self.state.clone();
        next.push_tracking(item.with_status(ContentStatus::Tracking));
        next.drop_watched(&item.id);
        next.push_notification(Notification::started_tracking(item, now));
        self.commit(next, "add_tracking")
    }

    /// Removes `id` from `watched`; no-op when absent.
    pub fn remove_from_watched(&mut self, id: &str) -> StoreResult<&TrackingState> {
        if !self.state.is_watched(id) {
            return Ok(&self.state);
        }
        let mut next = self.state.clone();
        next.drop_watched(id);
        self.commit(next, "remove_watched")
    }

    /// Removes `id` from `tracking`; no-op when absent.
    pub fn remove_from_tracking(&mut self, id: &str) -> StoreResult<&TrackingState> {
        if !self.state.is_tracking(id) {
            return Ok(&self.state);
        }
        let mut next = self.state.clone();
        next.drop_tracking(id);
        self.commit(next, "remove_tracking")
    }

    fn commit(&mut self, next: TrackingState, action: &str) -> StoreResult<&TrackingState> {
        let encoded = next.encode()?;
        if let Err(err) = self.storage.save(STATE_KEY, &encoded) {
            error!(
                "event=store_persist module=store status=error action={} error={}",
                action, err
            );
            return Err(err.into());
        }

        self.state = next;
        debug!(
            "event=store_persist module=store status=ok action={} watched={} tracking={} notifications={} bytes={}",
            action,
            self.state.watched().len(),
            self.state.tracking().len(),
            self.state.notifications().len(),
            encoded.len()
        );

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        Ok(&self.state)
    }
}

fn hydrate<S: StateStorage>(storage: &S) -> TrackingState {
    let raw = match storage.load(STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=store_hydrate module=store status=ok source=empty");
            return TrackingState::default();
        }
        Err(err) => {
            warn!(
                "event=store_hydrate module=store status=recovered reason=read_failed error={}",
                err
            );
            return TrackingState::default();
        }
    };

    let (state, report) = TrackingState::decode_lenient(&raw);
    if report.is_clean() {
        info!(
            "event=store_hydrate module=store status=ok source=storage watched={} tracking={} notifications={}",
            state.watched().len(),
            state.tracking().len(),
            state.notifications().len()
        );
    } else {
        warn!(
            "event=store_hydrate module=store status=recovered blob_valid={} watched={:?} tracking={:?} notifications={:?} dropped={}",
            report.blob_valid,
            report.watched,
            report.tracking,
            report.notifications,
            report.dropped_entries
        );
    }
    state
}
