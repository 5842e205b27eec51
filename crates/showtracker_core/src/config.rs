//! Runtime configuration for ShowTracker front ends.
//!
//! # Responsibility
//! - Resolve data, log and catalog locations from caller-provided overrides.
//! - Validate tunables before any storage is opened.
//!
//! # Invariants
//! - `data_dir` and `log_dir` are absolute after resolution.
//! - `upcoming_days` is at least 1.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use crate::release::window::DEFAULT_UPCOMING_DAYS;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = ".showtracker";
const DB_FILE_NAME: &str = "showtracker.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Unvalidated configuration inputs, typically from CLI flags or env vars.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub upcoming_days: Option<i64>,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_level: &'static str,
    pub catalog_path: Option<PathBuf>,
    pub upcoming_days: i64,
}

#[derive(Debug)]
pub enum ConfigError {
    CurrentDir(std::io::Error),
    LogLevel(LoggingError),
    UpcomingDays(i64),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CurrentDir(err) => write!(f, "cannot resolve working directory: {err}"),
            Self::LogLevel(err) => write!(f, "{err}"),
            Self::UpcomingDays(days) => {
                write!(f, "upcoming window must be at least 1 day, got {days}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CurrentDir(err) => Some(err),
            Self::LogLevel(err) => Some(err),
            Self::UpcomingDays(_) => None,
        }
    }
}

impl AppConfig {
    /// Applies defaults and validation to `overrides`.
    ///
    /// Relative paths are resolved against the current working directory.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Self::resolve_in(overrides, &cwd)
    }

    /// Like [`AppConfig::resolve`] with an explicit base directory.
    pub fn resolve_in(overrides: ConfigOverrides, base: &Path) -> Result<Self, ConfigError> {
        let data_dir = absolutize(
            overrides
                .data_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            base,
        );
        let log_level = match overrides.log_level.as_deref() {
            Some(level) => normalize_level(level).map_err(ConfigError::LogLevel)?,
            None => default_log_level(),
        };
        let upcoming_days = overrides.upcoming_days.unwrap_or(DEFAULT_UPCOMING_DAYS);
        if upcoming_days < 1 {
            return Err(ConfigError::UpcomingDays(upcoming_days));
        }

        Ok(Self {
            data_dir,
            log_level,
            catalog_path: overrides.catalog_path.map(|path| absolutize(path, base)),
            upcoming_days,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

fn absolutize(path: PathBuf, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
