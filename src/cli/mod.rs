//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod cache;
pub mod config;
pub mod render;

pub use cache::handle_cache_command;
pub use config::{handle_config_command, handle_init_command};
pub use render::{handle_render_command, RenderArgs};

use clap::Args;

use crate::config::Settings;

/// Settings that can be overridden per invocation
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Budget sync ID
    #[arg(long, env = "ACTUAL_SYNC_ID", global = true)]
    pub sync_id: Option<String>,

    /// API key of the actual-http-api server
    #[arg(long, env = "ACTUAL_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the actual-http-api server
    #[arg(long, env = "ACTUAL_API_URL", global = true)]
    pub base_url: Option<String>,

    /// Category group to display
    #[arg(long, env = "ACTUAL_WIDGET_GROUP", global = true)]
    pub group: Option<String>,

    /// Days to look back for uncategorized transactions
    #[arg(long, global = true)]
    pub lookback_days: Option<u32>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

impl SettingsOverrides {
    /// Apply the overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(sync_id) = &self.sync_id {
            settings.sync_id = sync_id.clone();
        }
        if let Some(api_key) = &self.api_key {
            settings.api_key = api_key.clone();
        }
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(group) = &self.group {
            settings.target_group = group.clone();
        }
        if let Some(days) = self.lookback_days {
            settings.lookback_days = days;
        }
        if self.debug {
            settings.debug_logging = true;
        }
    }
}
