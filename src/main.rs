mod app;
mod art;
mod assets;
mod commands;
mod config;
mod download;
mod profile;
mod session;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::run_tui;

#[derive(Parser)]
#[command(name = "portfolio-cli")]
#[command(version)]
#[command(about = "Interactive portfolio terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory or http(s) URL that site paths like /resume.pdf resolve against
    #[arg(long, env = "PORTFOLIO_CLI_ASSETS")]
    assets: Option<String>,

    /// Maximum width of the profile picture in characters
    #[arg(long)]
    art_width: Option<u32>,

    /// Start with an empty terminal
    #[arg(long)]
    no_welcome: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run command lines without the interactive terminal and print the output
    Exec {
        /// Lines to run, in order (e.g. "whoami" "cat portfolio.md")
        #[arg(required = true)]
        lines: Vec<String>,
    },
}

/// Log to a file so the terminal UI stays clean.
fn init_logging() {
    let log_path = dirs::data_local_dir()
        .map(|d| d.join(config::APP_DIR).join("portfolio-cli.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("portfolio-cli.log"));

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_env("PORTFOLIO_CLI_LOG")
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "portfolio-cli starting");

    let mut settings = config::load_config()?;
    if let Some(assets) = cli.assets {
        settings.asset_base = assets;
    }
    if let Some(width) = cli.art_width {
        settings.art_width = width;
    }
    if cli.no_welcome {
        settings.show_welcome = false;
    }

    match cli.command {
        Some(Commands::Exec { lines }) => {
            app::headless::run_lines(&settings, &lines).await?;
        }
        None => {
            run_tui(settings).await?;
        }
    }

    Ok(())
}
