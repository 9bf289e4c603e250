//! User settings for actual-widget
//!
//! Everything the widget needs to reach the server and format its output.
//! Settings are loaded once at startup and passed by reference afterwards.

use serde::{Deserialize, Serialize};

use super::paths::WidgetPaths;
use crate::error::WidgetError;

/// User settings for actual-widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Budget sync ID (Settings → Advanced → Sync ID in Actual)
    #[serde(default)]
    pub sync_id: String,

    /// API key configured on the actual-http-api server
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the actual-http-api instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the category group to display
    #[serde(default = "default_target_group")]
    pub target_group: String,

    /// Text shown before amounts
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,

    /// Text shown after amounts
    #[serde(default)]
    pub currency_suffix: String,

    /// Days to look back for uncategorized transactions
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    /// Log fetch details at debug level
    #[serde(default)]
    pub debug_logging: bool,

    /// Per-request timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5007".to_string()
}

fn default_target_group() -> String {
    "Bills".to_string()
}

fn default_currency_prefix() -> String {
    "$".to_string()
}

fn default_lookback_days() -> u32 {
    30
}

fn default_request_timeout_secs() -> u64 {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sync_id: String::new(),
            api_key: String::new(),
            base_url: default_base_url(),
            target_group: default_target_group(),
            currency_prefix: default_currency_prefix(),
            currency_suffix: String::new(),
            lookback_days: default_lookback_days(),
            debug_logging: false,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &WidgetPaths) -> Result<Self, WidgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WidgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WidgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WidgetPaths) -> Result<(), WidgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WidgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WidgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the server can be addressed at all
    pub fn validate(&self) -> Result<(), WidgetError> {
        if self.sync_id.trim().is_empty() {
            return Err(WidgetError::Config(
                "sync_id is not set (config file, --sync-id or ACTUAL_SYNC_ID)".into(),
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(WidgetError::Config(
                "api_key is not set (config file, --api-key or ACTUAL_API_KEY)".into(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(WidgetError::Config("base_url cannot be empty".into()));
        }
        Ok(())
    }

    /// Format an amount with the configured prefix and suffix
    pub fn format_amount(&self, amount: crate::models::Money) -> String {
        amount.format(&self.currency_prefix, &self.currency_suffix)
    }

    /// API key with all but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let count = self.api_key.chars().count();
        if count <= 4 {
            return "*".repeat(count);
        }
        let visible: String = self.api_key.chars().skip(count - 4).collect();
        format!("{}{}", "*".repeat(count - 4), visible)
    }
}
