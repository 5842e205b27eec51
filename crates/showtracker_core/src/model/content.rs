//! Content item domain model.
//!
//! # Responsibility
//! - Define the record describing one movie or TV show.
//! - Provide lenient release-date parsing for date-dependent views.
//!
//! # Invariants
//! - `id` is stable and unique across a catalog.
//! - `release_date` is stored verbatim; a value that does not parse is
//!   treated as "no date", never as an error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable external identifier of a content item (for example `tt0903747`).
pub type ContentId = String;

/// Media kind of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Tv,
}

impl ContentType {
    /// Human-readable label used by views.
    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Tv => "TV Show",
        }
    }

    /// Wire name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

/// Denormalized collection hint stamped on stored copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Watched,
    Tracking,
}

/// Validation error for content records loaded from external sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    EmptyId,
    EmptyTitle { id: ContentId },
}

impl Display for ContentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "content id must not be empty"),
            Self::EmptyTitle { id } => write!(f, "content `{id}` has an empty title"),
        }
    }
}

impl Error for ContentValidationError {}

/// One trackable movie or TV show.
///
/// Field names follow the persisted JSON layout (`releaseDate`, `posterUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    /// Serialized as `type` to match the external schema.
    #[serde(rename = "type")]
    pub kind: ContentType,
    /// ISO 8601 date string, kept verbatim.
    pub release_date: String,
    /// May be empty or unreachable; views degrade to a placeholder.
    pub poster_url: String,
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
}

impl ContentItem {
    /// Creates an item with empty poster/overview and no status hint.
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        kind: ContentType,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            release_date: release_date.into(),
            poster_url: String::new(),
            overview: String::new(),
            status: None,
        }
    }

    /// Returns a copy stamped with the given collection status.
    pub fn with_status(&self, status: ContentStatus) -> Self {
        Self {
            status: Some(status),
            ..self.clone()
        }
    }

    /// Parses `release_date`, returning `None` when it is not a valid date.
    pub fn release_day(&self) -> Option<NaiveDate> {
        parse_release_date(&self.release_date)
    }

    /// Release year for compact card rendering.
    pub fn release_year(&self) -> Option<i32> {
        self.release_day().map(|day| day.year())
    }

    /// Returns whether `poster_url` looks loadable at all.
    pub fn has_poster(&self) -> bool {
        let url = self.poster_url.trim();
        url.starts_with("https://") || url.starts_with("http://")
    }

    /// Checks fields that external catalog sources must provide.
    pub fn validate(&self) -> Result<(), ContentValidationError> {
        if self.id.trim().is_empty() {
            return Err(ContentValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ContentValidationError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Parses an ISO 8601 date or timestamp.
///
/// Accepts `YYYY-MM-DD`, RFC 3339, zone-less `YYYY-MM-DDTHH:MM:SS` and the
/// reduced forms `YYYY-MM` and `YYYY`, which land on the first day of the
/// period. Timestamps contribute only their date part.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    parse_reduced_date(trimmed)
}

fn parse_reduced_date(value: &str) -> Option<NaiveDate> {
    let digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());
    match value.split_once('-') {
        Some((year, month)) if digits(year, 4) && digits(month, 2) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if digits(value, 4) => NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1),
        _ => None,
    }
}
