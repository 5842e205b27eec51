//! Content catalog sources.
//!
//! # Responsibility
//! - Provide the read-only list of items search runs against.
//! - Allow swapping the embedded fixture for a JSON file with the same shape.
//!
//! # Invariants
//! - Catalog order is stable; search preserves it.
//! - Item ids are unique within one catalog.

mod fixtures;

use crate::model::content::{ContentItem, ContentValidationError};
use log::{error, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error raised while loading an external catalog source.
#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Validation(ContentValidationError),
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse catalog `{}`: {source}", path.display())
            }
            Self::Validation(err) => write!(f, "invalid catalog item: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate catalog id `{id}`"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<ContentValidationError> for CatalogError {
    fn from(value: ContentValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-only source of catalog items.
pub trait CatalogSource {
    /// All items in stable catalog order.
    fn items(&self) -> &[ContentItem];

    /// Looks up one item by its external id.
    fn find(&self, id: &str) -> Option<&ContentItem> {
        self.items().iter().find(|item| item.id == id)
    }
}

/// Catalog backed by the embedded fixture list.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    items: Vec<ContentItem>,
}

impl StaticCatalog {
    /// Returns the built-in catalog.
    pub fn embedded() -> Self {
        Self {
            items: fixtures::catalog_items(),
        }
    }

    /// Builds a catalog from caller-provided items after validation.
    pub fn from_items(items: Vec<ContentItem>) -> CatalogResult<Self> {
        validate_items(&items)?;
        Ok(Self { items })
    }
}

impl CatalogSource for StaticCatalog {
    fn items(&self) -> &[ContentItem] {
        &self.items
    }
}

/// Catalog loaded from a JSON array of content items.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
    items: Vec<ContentItem>,
}

impl JsonCatalog {
    /// Reads and validates a catalog file.
    ///
    /// # Errors
    /// - `Io` when the file cannot be read.
    /// - `Parse` when the content is not a JSON array of items.
    /// - `Validation` / `DuplicateId` when items break catalog invariants.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref().to_path_buf();
        let result = load_json_items(&path);
        match &result {
            Ok(items) => info!(
                "event=catalog_load module=catalog status=ok source=json items={}",
                items.len()
            ),
            Err(err) => error!(
                "event=catalog_load module=catalog status=error source=json error={}",
                err
            ),
        }
        Ok(Self {
            items: result?,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalog {
    fn items(&self) -> &[ContentItem] {
        &self.items
    }
}

/// Fixed featured picks for the home view.
///
/// Stands in for a recommender; the list does not depend on user history.
pub fn suggestions() -> Vec<ContentItem> {
    fixtures::suggestion_items()
}

fn load_json_items(path: &Path) -> CatalogResult<Vec<ContentItem>> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<ContentItem> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_items(&items)?;
    Ok(items)
}

fn validate_items(items: &[ContentItem]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}
