//! Storage layer for actual-widget
//!
//! Provides JSON file storage with atomic writes and the cache of the last
//! successful budget fetch.

pub mod cache;
pub mod file_io;

pub use cache::{CacheSnapshot, CacheStore, FileCacheStore, MemoryCacheStore, CACHE_KEY};
pub use file_io::{read_json_optional, write_json_atomic};
