//! Catalog search entry points.
//!
//! # Responsibility
//! - Expose title search over any `CatalogSource`.
//! - Keep result shaping inside core.

pub mod title;
