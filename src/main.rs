use anyhow::Result;
use clap::{Parser, Subcommand};

use actual_widget::cli::{
    handle_cache_command, handle_config_command, handle_init_command, handle_render_command,
    RenderArgs, SettingsOverrides,
};
use actual_widget::config::{Settings, WidgetPaths};
use actual_widget::logging;

#[derive(Parser)]
#[command(
    name = "actual-widget",
    author = "Kaylee Beyene",
    version,
    about = "Budget balance widget for Actual Budget",
    long_about = "actual-widget shows the balances of one category group and a count of \
                  recent uncategorized transactions from an actual-http-api server. \
                  When the server is unreachable it falls back to the last good fetch."
)]
struct Cli {
    #[command(flatten)]
    overrides: SettingsOverrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch data and print the widget (default)
    Render(RenderArgs),

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// Show the cached budget snapshot
    Cache,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WidgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    cli.overrides.apply(&mut settings);

    logging::init(settings.debug_logging);

    match cli.command {
        None => handle_render_command(&paths, &settings, RenderArgs::default())?,
        Some(Commands::Render(args)) => handle_render_command(&paths, &settings, args)?,
        Some(Commands::Init) => handle_init_command(&paths)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        Some(Commands::Cache) => handle_cache_command(&paths, &settings)?,
    }

    Ok(())
}
