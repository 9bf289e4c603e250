//! Cache command

use crate::config::{Settings, WidgetPaths};
use crate::display::format_snapshot;
use crate::error::WidgetResult;
use crate::storage::{CacheStore, FileCacheStore};

/// Handle the cache command: show what a failed fetch would fall back to
pub fn handle_cache_command(paths: &WidgetPaths, settings: &Settings) -> WidgetResult<()> {
    let store = FileCacheStore::new(paths.cache_file());
    println!("Cache file: {}", store.path().display());
    print!("{}", format_snapshot(store.load().as_ref(), settings));
    Ok(())
}
