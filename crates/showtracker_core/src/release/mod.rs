//! Release-date derived views over tracked content.
//!
//! # Responsibility
//! - Group tracked items by release day and build month grids.
//! - Compute the upcoming window and the unified notification feed.
//!
//! # Invariants
//! - Items whose release date does not parse are skipped by every
//!   date-dependent view and sort after dated items; they never error.

pub mod calendar;
pub mod window;
