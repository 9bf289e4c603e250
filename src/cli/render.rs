//! Render command
//!
//! Runs one refresh cycle against the configured server and prints the
//! widget.

use std::io::IsTerminal;
use std::time::Duration;

use clap::Args;

use crate::api::ReqwestHttpClient;
use crate::clock::SystemClock;
use crate::config::{Settings, WidgetPaths};
use crate::display::{format_account_stats, format_widget};
use crate::error::WidgetResult;
use crate::services::{WidgetOutcome, WidgetService};
use crate::storage::FileCacheStore;

/// Options for rendering the widget
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Print the widget model as JSON for a widget host
    #[arg(long)]
    pub json: bool,

    /// Also print per-account transaction counts
    #[arg(long)]
    pub stats: bool,

    /// Disable colored balances
    #[arg(long)]
    pub no_color: bool,
}

/// Handle the render command
///
/// A "no data" widget is still a successful render.
pub fn handle_render_command(
    paths: &WidgetPaths,
    settings: &Settings,
    args: RenderArgs,
) -> WidgetResult<()> {
    settings.validate()?;

    let http = ReqwestHttpClient::new(Duration::from_secs(settings.request_timeout_secs))?;
    let cache = FileCacheStore::new(paths.cache_file());
    let clock = SystemClock;

    let outcome = WidgetService::new(&http, settings, &cache, &clock).refresh();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let color = !args.no_color && std::io::stdout().is_terminal();
    print!("{}", format_widget(&outcome, color));

    if args.stats {
        if let WidgetOutcome::Ready(model) = &outcome {
            println!();
            print!("{}", format_account_stats(&model.account_stats));
        }
    }

    Ok(())
}
