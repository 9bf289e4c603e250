//! Last-known-good budget snapshot
//!
//! A single snapshot of the `categorygroups` payload is kept so the widget
//! can still show balances when the server is unreachable. Each successful
//! fetch overwrites it; nothing else writes or deletes it.

use std::cell::RefCell;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::file_io::{read_json_optional, write_json_atomic};
use crate::error::WidgetResult;

/// Fixed key the snapshot is stored under
pub const CACHE_KEY: &str = "actual-cache";

/// The last successful budget fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// When the payload was fetched
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Raw `categorygroups` response body
    pub data: serde_json::Value,
}

/// Read an RFC 3339 timestamp, treating anything unparseable as absent
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc)))
}

impl CacheSnapshot {
    /// Create a snapshot of a payload fetched at `timestamp`
    pub fn new(timestamp: DateTime<Utc>, data: serde_json::Value) -> Self {
        Self {
            timestamp: Some(timestamp),
            data,
        }
    }
}

/// Storage for the single cached snapshot
pub trait CacheStore {
    /// The stored snapshot, or `None` when absent or unreadable
    fn load(&self) -> Option<CacheSnapshot>;

    /// Replace the stored snapshot
    fn save(&self, snapshot: &CacheSnapshot) -> WidgetResult<()>;
}

/// Snapshot kept as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    path: PathBuf,
}

impl FileCacheStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CacheStore for FileCacheStore {
    fn load(&self) -> Option<CacheSnapshot> {
        match read_json_optional(&self.path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = CACHE_KEY, error = %e, "Cache could not be parsed");
                None
            }
        }
    }

    fn save(&self, snapshot: &CacheSnapshot) -> WidgetResult<()> {
        write_json_atomic(&self.path, snapshot)
    }
}

/// In-memory store, used for dry runs and tests
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    snapshot: RefCell<Option<CacheSnapshot>>,
}

impl MemoryCacheStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `snapshot`
    pub fn with_snapshot(snapshot: CacheSnapshot) -> Self {
        Self {
            snapshot: RefCell::new(Some(snapshot)),
        }
    }
}

impl CacheStore for MemoryCacheStore {
    fn load(&self) -> Option<CacheSnapshot> {
        self.snapshot.borrow().clone()
    }

    fn save(&self, snapshot: &CacheSnapshot) -> WidgetResult<()> {
        *self.snapshot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }
}
