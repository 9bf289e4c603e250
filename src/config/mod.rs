//! Configuration module for actual-widget
//!
//! This module provides configuration management including:
//! - Path resolution for the settings file and the cache
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WidgetPaths;
pub use settings::Settings;
