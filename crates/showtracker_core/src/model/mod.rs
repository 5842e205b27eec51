//! Domain model for catalog items and tracking activity.
//!
//! # Responsibility
//! - Define the canonical content record shared by catalog, store and views.
//! - Define the append-only notification record.
//!
//! # Invariants
//! - Every content item is identified by a stable external `ContentId`.
//! - `ContentItem::status` is a hint; collection membership is authoritative.

pub mod content;
pub mod notification;
