//! Core domain logic for ShowTracker.
//! This crate is the single source of truth for tracking invariants.

pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod release;
pub mod search;
pub mod storage;
pub mod store;

pub use catalog::{suggestions, CatalogError, CatalogSource, JsonCatalog, StaticCatalog};
pub use config::{AppConfig, ConfigError, ConfigOverrides};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::content::{ContentId, ContentItem, ContentStatus, ContentType};
pub use model::notification::Notification;
pub use release::calendar::{CalendarDay, CalendarMonth, YearMonth, WEEKDAY_HEADERS};
pub use release::window::{
    group_by_release_day, monthly_digest, release_schedule, unified_feed, upcoming_releases,
    FeedEntry, FeedKind, UpcomingRelease, DEFAULT_SCHEDULE_LIMIT, DEFAULT_UPCOMING_DAYS,
};
pub use search::title::{search_titles, SearchQuery, TypeFilter};
pub use storage::kv::{MemoryStateStorage, SqliteStateStorage, StateStorage, StorageError};
pub use store::clock::{Clock, FixedClock, SystemClock};
pub use store::state::TrackingState;
pub use store::tracking::{StoreError, StoreResult, TrackingStore, STATE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
