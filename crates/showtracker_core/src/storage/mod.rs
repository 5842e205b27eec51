//! Key-value persistence slot for serialized store state.
//!
//! # Responsibility
//! - Define the storage contract the tracking store writes through.
//! - Isolate SQLite details from store orchestration.
//!
//! # Invariants
//! - A `save` fully replaces the previous value under the same key.
//! - A `load` of a never-written key returns `Ok(None)`, not an error.

pub mod kv;
