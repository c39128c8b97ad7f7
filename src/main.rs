//! rowfilter - Terminal Table with Live Filtering
//!
//! Shows a table of user records and filters it as you type.

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use rowfilter::config::Config;
use rowfilter::records::{load_records, sample_records};
use rowfilter::render::{ColorTheme, TerminalUI};
use rowfilter::{Application, RowFilterError};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("rowfilter")
        .version(rowfilter::VERSION)
        .about("Filter a table of user records as you type")
        .long_about(
            "rowfilter shows user records in a terminal table. Type in the search box to \
             match any column, or Tab to the per-column filters. The age filter accepts an \
             exact age (30) or an inclusive range (20-40).",
        )
        .arg(
            Arg::new("records")
                .long("records")
                .short('r')
                .value_name("FILE")
                .help("TOML file with [[records]] entries (defaults to the built-in sample)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file to use instead of the default location"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Color theme: default, monochrome or high-contrast"),
        )
        .arg(
            Arg::new("placeholder")
                .long("placeholder")
                .value_name("TEXT")
                .help("Message shown when no record matches"),
        )
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, matches: &ArgMatches) -> rowfilter::Result<()> {
    if let Some(path) = matches.get_one::<String>("records") {
        config.records = Some(PathBuf::from(path));
    }
    if let Some(theme) = matches.get_one::<String>("theme") {
        config.theme = theme.clone();
    }
    if let Some(placeholder) = matches.get_one::<String>("placeholder") {
        if placeholder.trim().is_empty() {
            return Err(RowFilterError::invalid_argument(
                "--placeholder must not be empty",
            ));
        }
        config.placeholder = placeholder.clone();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; enable with RUST_LOG and redirect stderr while the TUI runs.
    env_logger::init();

    let matches = cli().get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = Config::load_or_default(config_path.as_deref())
        .context("failed to load configuration")?;
    apply_overrides(&mut config, &matches)?;

    let theme = ColorTheme::from_name(&config.theme)?;

    let records = match &config.records {
        Some(path) => load_records(path)
            .with_context(|| format!("failed to load records from {}", path.display()))?,
        None => sample_records(),
    };

    let ui_renderer = Box::new(TerminalUI::with_theme(theme)?);
    let mut app = Application::new(records, &config, ui_renderer);

    app.run().await?;

    Ok(())
}
