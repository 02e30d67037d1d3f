// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use card_collector::{AnalyticsSnapshot, AppConfig, RandomMetrics};
use std::env;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env();
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("config") => print_config(&config)?,
        Some("analytics") => print_analytics(&config)?,
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage: card-collector [config|analytics]");
            std::process::exit(2);
        }
        None => run_ui_mode(&config)?,
    }

    Ok(())
}

/// Logs go to stderr so they stay out of the terminal UI and of JSON output
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "card_collector=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_config(config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", json);
    Ok(())
}

fn print_analytics(config: &AppConfig) -> Result<()> {
    let snapshot = AnalyticsSnapshot::collect(config, &RandomMetrics::new());
    let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize analytics")?;
    println!("{}", json);
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &AppConfig) -> Result<()> {
    tracing::debug!(api_base_url = %config.api_base_url, "starting terminal UI");

    let mut app = ui::App::new(config, Box::new(RandomMetrics::new()));
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &AppConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web UI: cargo run --bin card-server --features server");
    std::process::exit(1);
}
