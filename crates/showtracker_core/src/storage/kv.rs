//! Key-value storage contracts with SQLite and in-memory implementations.
//!
//! # Responsibility
//! - Read and write opaque string blobs by key.
//!
//! # Invariants
//! - Writes are synchronous; a returned `Ok` means the value is durable for
//!   the backing medium.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for key-value access.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// The backend refused the write (used by in-memory test doubles).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persisted key-value slot used by the tracking store.
pub trait StateStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: StateStorage + ?Sized> StateStorage for Box<S> {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).save(key, value)
    }
}

/// SQLite-backed key-value slot over the `kv_store` table.
pub struct SqliteStateStorage {
    conn: Connection,
}

impl SqliteStateStorage {
    /// Wraps a connection returned by `db::open_db*` (migrations applied).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl StateStorage for SqliteStateStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-process key-value slot, used by tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStorage {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with one raw value.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    /// Makes every subsequent `save` fail with `StorageError::Unavailable`.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Raw stored value for assertions.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StateStorage for MemoryStateStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.read_only {
            return Err(StorageError::Unavailable(format!(
                "write to `{key}` rejected: storage is read-only"
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
