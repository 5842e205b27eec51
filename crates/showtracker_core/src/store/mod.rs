//! Tracking state store.
//!
//! # Responsibility
//! - Own the watched/tracking/notification collections for one session.
//! - Write every state transition through to the persisted key-value slot.
//! - Notify subscribers after each committed change.
//!
//! # Invariants
//! - An id is in at most one of `watched` / `tracking`.
//! - Persisted state always equals in-memory state after a mutation returns.

pub mod clock;
pub mod state;
pub mod tracking;
