#![forbid(unsafe_code)]

mod config;
mod constants;
mod gui;
mod options;
mod panel;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::Config;
use panel::{project, SelectionState};

#[derive(Parser, Debug)]
#[command(name = "article-params", version, about = "Article typography and layout settings panel")]
struct Cli {
    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the default style variables as JSON and exit
    #[arg(long)]
    print_styles: bool,
}

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_styles {
        let styles = project(&SelectionState::default());
        let json = serde_json::to_string_pretty(&styles).context("Failed to serialize styles")?;
        println!("{json}");
        return Ok(());
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)?;

    // CLI flag, then environment, then config file
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var(constants::env::LOG_LEVEL).ok())
        .unwrap_or_else(|| config.log_level.clone());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&log_level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    info!(config = %config_path.display(), level = %log_level, "Starting article params");
    gui::run_gui(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_level("warn"), TraceLevel::WARN);
        assert_eq!(parse_level("nonsense"), TraceLevel::INFO);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["article-params", "--print-styles", "--log-level", "trace"]);
        assert!(cli.print_styles);
        assert_eq!(cli.log_level.as_deref(), Some("trace"));
        assert!(cli.config.is_none());
    }
}
