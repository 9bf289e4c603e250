//! Cached snapshot display

use crate::api::decode_data;
use crate::config::Settings;
use crate::models::CategoryGroup;
use crate::storage::{CacheSnapshot, CACHE_KEY};

/// Describe the cached snapshot: when it was taken and what it holds
pub fn format_snapshot(snapshot: Option<&CacheSnapshot>, settings: &Settings) -> String {
    let Some(snapshot) = snapshot else {
        return "No cached data.\n".to_string();
    };

    let mut output = String::new();
    match snapshot.timestamp {
        Some(at) => output.push_str(&format!("Cached at: {}\n", at.to_rfc3339())),
        None => output.push_str("Cached at: unknown\n"),
    }

    match decode_data::<CategoryGroup>(CACHE_KEY, &snapshot.data) {
        Ok(groups) => {
            output.push_str(&format!("Groups: {}\n", groups.len()));
            for group in &groups {
                let marker = if group.name == settings.target_group {
                    " *"
                } else {
                    ""
                };
                output.push_str(&format!(
                    "  {} ({} categories){}\n",
                    group.name,
                    group.categories.len(),
                    marker
                ));
            }
        }
        Err(e) => output.push_str(&format!("Unreadable payload: {}\n", e)),
    }

    output
}
