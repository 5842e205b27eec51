//! Case-insensitive title search.
//!
//! # Responsibility
//! - Match query text as a substring of item titles.
//! - Apply the optional media-type filter.
//!
//! # Invariants
//! - Blank queries return no hits.
//! - Hits keep catalog order; there is no ranking.

use crate::catalog::CatalogSource;
use crate::model::content::{ContentItem, ContentType};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Media-type filter for search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Movie,
    Tv,
}

impl TypeFilter {
    /// Returns whether `kind` passes this filter.
    pub fn accepts(self, kind: ContentType) -> bool {
        match self {
            Self::All => true,
            Self::Movie => kind == ContentType::Movie,
            Self::Tv => kind == ContentType::Tv,
        }
    }
}

/// Error for filter names outside `all|movie|tv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl Display for UnknownFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown type filter `{}`; expected all|movie|tv", self.0)
    }
}

impl Error for UnknownFilter {}

impl FromStr for TypeFilter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "movie" | "movies" => Ok(Self::Movie),
            "tv" | "show" | "shows" => Ok(Self::Tv),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// Search options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// User query text, matched case-insensitively.
    pub text: String,
    pub filter: TypeFilter,
}

impl SearchQuery {
    /// Creates a query with no type filter.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filter: TypeFilter::All,
        }
    }

    pub fn with_filter(mut self, filter: TypeFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Filters `catalog` by title substring and type.
///
/// Returns an empty list for blank queries.
pub fn search_titles<'a, C>(catalog: &'a C, query: &SearchQuery) -> Vec<&'a ContentItem>
where
    C: CatalogSource + ?Sized,
{
    if query.text.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.text.to_lowercase();
    catalog
        .items()
        .iter()
        .filter(|item| query.filter.accepts(item.kind))
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .collect()
}
