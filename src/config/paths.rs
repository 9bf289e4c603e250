//! Path management for actual-widget
//!
//! Resolves where the settings file and the cached budget snapshot live.
//!
//! ## Path Resolution Order
//!
//! 1. `ACTUAL_WIDGET_DIR` environment variable (if set)
//! 2. The platform config directory for `actual-widget`
//!    (e.g. `~/.config/actual-widget` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::WidgetError;

/// Manages all paths used by actual-widget
#[derive(Debug, Clone)]
pub struct WidgetPaths {
    /// Base directory for all actual-widget files
    base_dir: PathBuf,
}

impl WidgetPaths {
    /// Create a new WidgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, WidgetError> {
        let base_dir = if let Ok(custom) = std::env::var("ACTUAL_WIDGET_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "actual-widget")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    WidgetError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create WidgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the cache directory
    pub fn cache_dir(&self) -> PathBuf {
        self.base_dir.join("cache")
    }

    /// Get the path of the cached budget snapshot
    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir().join("actual-cache.json")
    }

    /// Ensure the base and cache directories exist
    pub fn ensure_directories(&self) -> Result<(), WidgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WidgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.cache_dir())
            .map_err(|e| WidgetError::Io(format!("Failed to create cache directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WidgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.cache_dir(), temp_dir.path().join("cache"));
        assert_eq!(
            paths.cache_file(),
            temp_dir.path().join("cache").join("actual-cache.json")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WidgetPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.cache_dir().exists());
        assert!(!paths.is_initialized());
    }
}
