//! SQLite cache store for raw API payloads
//!
//! Provides a `Cache` that keeps one row per key in a single `cache` table,
//! recording when each value was last written.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info};

/// Application directory name under the cache root
const APP_NAME: &str = "sonaveeb";

/// File name of the cache database
const CACHE_FILE: &str = "cache.db";

/// Environment variable overriding the cache root directory
const CACHE_ROOT_ENV: &str = "XDG_CACHE_HOME";

/// Columns the current schema requires
const REQUIRED_COLUMNS: [&str; 3] = ["key", "value", "created_at"];

/// Errors that can occur when opening or using the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// No per-user cache directory could be determined
    #[error("Could not determine a cache directory")]
    NoDefaultPath,

    /// The directory holding the cache file could not be created
    #[error("Failed to create cache directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// SQLite reported an error
    #[error("Cache database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A previous holder of the connection panicked
    #[error("Cache connection lock poisoned")]
    Poisoned,
}

/// A cached value together with the time it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The opaque cached payload
    pub value: Vec<u8>,
    /// When the value was last written (second precision)
    pub created_at: DateTime<Utc>,
}

/// Outcome of inspecting an existing cache table at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCheck {
    /// The table is absent or already has the current layout
    Compatible,
    /// The table was written by an older layout and must be recreated
    Rebuild,
}

/// Persistent key-value cache backed by a single SQLite file
///
/// The connection sits behind a mutex so the cache can be shared by an async
/// source; each operation is a single statement and relies on SQLite's own
/// locking when other processes touch the same file.
pub struct Cache {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Resolves the default cache file location
///
/// Uses `$XDG_CACHE_HOME/sonaveeb/cache.db` when the variable is set, otherwise
/// the platform's per-user cache directory (`~/.cache/sonaveeb/` on Linux).
pub fn default_path() -> Result<PathBuf, CacheError> {
    let root_override = std::env::var_os(CACHE_ROOT_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);
    cache_path_from(root_override.as_deref())
}

fn cache_path_from(root_override: Option<&Path>) -> Result<PathBuf, CacheError> {
    let dir = match root_override {
        Some(root) => root.join(APP_NAME),
        None => ProjectDirs::from("", "", APP_NAME)
            .ok_or(CacheError::NoDefaultPath)?
            .cache_dir()
            .to_path_buf(),
    };
    Ok(dir.join(CACHE_FILE))
}

impl Cache {
    /// Opens or creates the cache at the default location
    pub fn open() -> Result<Self, CacheError> {
        let path = default_path()?;
        Self::open_at(path)
    }

    /// Opens or creates the cache at the given path
    ///
    /// Missing parent directories are created. If the file holds a cache table
    /// from an older layout, that table is dropped and rebuilt.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| CacheError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(&path)?;
        init_schema(&conn)?;
        debug!(path = %path.display(), "Opened cache");

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Returns the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, CacheError> {
        self.conn.lock().map_err(|_| CacheError::Poisoned)
    }

    /// Reads an entry, returning `Ok(None)` when the key is absent
    pub fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT value, created_at FROM cache WHERE key = ?1",
                params![key],
                |row| Ok((row.get::<_, Vec<u8>>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()?;

        Ok(row.map(|(value, created_at)| CacheEntry {
            value,
            created_at: DateTime::from_timestamp(created_at, 0).unwrap_or_default(),
        }))
    }

    /// Stores a value, replacing any previous entry and refreshing its timestamp
    pub fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO cache (key, value, created_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    /// Removes a single entry
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM cache WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Removes every entry
    pub fn clear(&self) -> Result<(), CacheError> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM cache", [])?;
        Ok(())
    }

    /// Closes the underlying connection, reporting any error from SQLite
    pub fn close(self) -> Result<(), CacheError> {
        let conn = self.conn.into_inner().map_err(|_| CacheError::Poisoned)?;
        conn.close().map_err(|(_, err)| CacheError::Database(err))
    }
}

/// Inspects the columns of an existing `cache` table
pub fn check_schema(conn: &Connection) -> rusqlite::Result<SchemaCheck> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('cache')")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    if columns.is_empty() {
        return Ok(SchemaCheck::Compatible);
    }

    let complete = REQUIRED_COLUMNS
        .iter()
        .all(|required| columns.iter().any(|column| column == required));
    if complete {
        Ok(SchemaCheck::Compatible)
    } else {
        Ok(SchemaCheck::Rebuild)
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    if check_schema(conn)? == SchemaCheck::Rebuild {
        info!("Cache table has an outdated layout, rebuilding");
        conn.execute("DROP TABLE IF EXISTS cache", [])?;
    }

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS cache (
            key        TEXT PRIMARY KEY,
            value      BLOB,
            created_at INTEGER
        )
        "#,
        [],
    )?;
    Ok(())
}
