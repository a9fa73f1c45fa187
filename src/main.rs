//! Q&A knowledge-base dashboard - entry point.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Terminal client for a Q&A knowledge-base backend
#[derive(Parser, Debug)]
#[command(name = "qkb")]
#[command(version)]
#[command(about = "Browse and administer a Q&A knowledge base from the terminal")]
pub struct Args {
    /// Backend API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Items per page for the Q&A list
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = qkb::config::load_config_with_precedence(args.config.clone())?;
        let merged = qkb::config::merge_config(config_file);
        let with_env = qkb::config::apply_env_overrides(merged);
        qkb::config::apply_cli_overrides(with_env, args.base_url.clone(), args.page_size)
    };

    qkb::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration loaded and resolved");

    let client = qkb::api::ApiClient::new(
        &config.base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let worker = qkb::api::ApiWorker::spawn(client);

    let color_config = qkb::view::ColorConfig::from_env_and_args(args.no_color);
    let styles = qkb::view::UiStyles::new(color_config);

    let mut app = qkb::view::TuiApp::new(worker, config.page_size, styles)?;
    app.run()?;

    Ok(())
}
