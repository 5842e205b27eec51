//! Application context: configuration, catalog and the tracking store.
//!
//! # Responsibility
//! - Own the single store instance and pass it to views by reference.
//! - Resolve content ids typed by the user into catalog items.

use crate::views;
use anyhow::{anyhow, Context, Result};
use log::info;
use showtracker_core::db::open_db;
use showtracker_core::{
    monthly_digest, release_schedule, search_titles, suggestions, unified_feed,
    upcoming_releases, AppConfig, CalendarMonth, CatalogSource, Clock, ContentItem,
    JsonCatalog, SearchQuery, SqliteStateStorage, StateStorage, StaticCatalog, SystemClock,
    TrackingStore, YearMonth, DEFAULT_SCHEDULE_LIMIT,
};

/// Screens a front end can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Search(SearchQuery),
    Calendar(Option<YearMonth>),
    Notifications,
}

pub struct App<S: StateStorage, C: Clock = SystemClock> {
    catalog: Box<dyn CatalogSource>,
    featured: Vec<ContentItem>,
    store: TrackingStore<S, C>,
    upcoming_days: i64,
}

impl App<SqliteStateStorage> {
    /// Opens the on-disk store and catalog described by `config`.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let catalog: Box<dyn CatalogSource> = match &config.catalog_path {
            Some(path) => Box::new(
                JsonCatalog::from_path(path)
                    .with_context(|| format!("loading catalog {}", path.display()))?,
            ),
            None => Box::new(StaticCatalog::embedded()),
        };
        let db_path = config.db_path();
        let conn = open_db(&db_path)
            .with_context(|| format!("opening database {}", db_path.display()))?;
        let store = TrackingStore::open(SqliteStateStorage::new(conn));
        info!(
            "event=app_open module=cli status=ok catalog_items={}",
            catalog.items().len()
        );
        Ok(Self::new(catalog, store, config.upcoming_days))
    }
}

impl<S: StateStorage, C: Clock> App<S, C> {
    pub fn new(
        catalog: Box<dyn CatalogSource>,
        store: TrackingStore<S, C>,
        upcoming_days: i64,
    ) -> Self {
        Self {
            catalog,
            featured: suggestions(),
            store,
            upcoming_days,
        }
    }

    pub fn store(&self) -> &TrackingStore<S, C> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TrackingStore<S, C> {
        &mut self.store
    }

    /// Finds an item by id in the catalog, the featured list, then the
    /// user's own collections.
    pub fn resolve(&self, id: &str) -> Result<ContentItem> {
        let state = self.store.state();
        self.catalog
            .find(id)
            .or_else(|| self.featured.iter().find(|item| item.id == id))
            .or_else(|| state.tracking().iter().find(|item| item.id == id))
            .or_else(|| state.watched().iter().find(|item| item.id == id))
            .cloned()
            .ok_or_else(|| anyhow!("unknown content id `{id}`"))
    }

    pub fn watch(&mut self, id: &str) -> Result<()> {
        let item = self.resolve(id)?;
        self.store.add_to_watched(&item)?;
        Ok(())
    }

    pub fn track(&mut self, id: &str) -> Result<()> {
        let item = self.resolve(id)?;
        self.store.add_to_tracking(&item)?;
        Ok(())
    }

    pub fn unwatch(&mut self, id: &str) -> Result<()> {
        self.store.remove_from_watched(id)?;
        Ok(())
    }

    pub fn untrack(&mut self, id: &str) -> Result<()> {
        self.store.remove_from_tracking(id)?;
        Ok(())
    }

    /// Renders `screen` against current state.
    pub fn render(&self, screen: &Screen) -> String {
        let state = self.store.state();
        let clock = self.store.clock();
        match screen {
            Screen::Home => views::home::render_home(state, &self.featured),
            Screen::Search(query) => {
                let hits = search_titles(self.catalog.as_ref(), query);
                views::search::render_search(query, &hits, state)
            }
            Screen::Calendar(month) => {
                let today = clock.today();
                let month = (*month).unwrap_or_else(|| YearMonth::of(today));
                let grid = CalendarMonth::build(month, state.tracking(), today);
                let schedule = release_schedule(state.tracking(), DEFAULT_SCHEDULE_LIMIT);
                views::calendar::render_calendar(&grid, &schedule)
            }
            Screen::Notifications => {
                let upcoming =
                    upcoming_releases(state.tracking(), &clock.local_now(), self.upcoming_days);
                let feed = unified_feed(&upcoming, state.notifications());
                let digest = monthly_digest(upcoming.len(), self.upcoming_days);
                views::notifications::render_notifications(&feed, digest.as_deref(), clock.now())
            }
        }
    }

    /// Number of activity notifications, shown as the alerts badge.
    pub fn alert_count(&self) -> usize {
        self.store.state().notifications().len()
    }
}
