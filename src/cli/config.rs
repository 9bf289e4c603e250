//! Config and init commands

use crate::config::{Settings, WidgetPaths};
use crate::error::WidgetResult;

/// Describe paths and effective settings, with the API key masked
pub fn format_config(paths: &WidgetPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("actual-widget configuration\n");
    output.push_str(&format!("  Config dir:     {}\n", paths.base_dir().display()));
    output.push_str(&format!("  Settings file:  {}\n", paths.settings_file().display()));
    output.push_str(&format!("  Cache file:     {}\n", paths.cache_file().display()));
    output.push_str(&format!(
        "  Initialized:    {}\n",
        if paths.is_initialized() { "Yes" } else { "No" }
    ));
    output.push('\n');
    output.push_str(&format!("  Base URL:       {}\n", settings.base_url));
    output.push_str(&format!("  Sync ID:        {}\n", settings.sync_id));
    output.push_str(&format!("  API key:        {}\n", settings.masked_api_key()));
    output.push_str(&format!("  Group:          {}\n", settings.target_group));
    output.push_str(&format!(
        "  Currency:       {}1.00{}\n",
        settings.currency_prefix, settings.currency_suffix
    ));
    output.push_str(&format!("  Lookback days:  {}\n", settings.lookback_days));
    output.push_str(&format!("  Timeout (s):    {}\n", settings.request_timeout_secs));
    output.push_str(&format!(
        "  Debug logging:  {}\n",
        if settings.debug_logging { "Yes" } else { "No" }
    ));
    output
}

/// Handle the config command
pub fn handle_config_command(paths: &WidgetPaths, settings: &Settings) -> WidgetResult<()> {
    print!("{}", format_config(paths, settings));
    Ok(())
}

/// Handle the init command: write default settings if none exist yet
pub fn handle_init_command(paths: &WidgetPaths) -> WidgetResult<()> {
    if paths.is_initialized() {
        println!(
            "Settings already exist at: {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    Settings::default().save(paths)?;
    println!("Created settings at: {}", paths.settings_file().display());
    println!("Set sync_id and api_key there, or pass --sync-id/--api-key.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_config_masks_key() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WidgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            sync_id: "sync-1".into(),
            api_key: "super-secret".into(),
            ..Settings::default()
        };

        let text = format_config(&paths, &settings);
        assert!(text.contains("Sync ID:        sync-1"));
        assert!(text.contains("********cret"));
        assert!(!text.contains("super-secret"));
        assert!(text.contains("Initialized:    No"));
    }

    #[test]
    fn test_init_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WidgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        handle_init_command(&paths).unwrap();
        assert!(paths.is_initialized());

        let mut custom = Settings::load_or_create(&paths).unwrap();
        custom.sync_id = "kept".into();
        custom.save(&paths).unwrap();

        handle_init_command(&paths).unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap().sync_id, "kept");
    }
}
