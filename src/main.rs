use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::http::Method;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use webui_demo::chat;
use webui_demo::config::Settings;
use webui_demo::server::ApiServer;
use webui_demo::simulator::{DemoSimulator, LatencyRange, RequestOptions};

/// Demo-mode backend for the web chat interface
#[derive(Parser, Debug)]
#[command(name = "webui-demo", version)]
struct Cli {
    /// Directory holding default.toml and local.toml
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the demo server and an interactive chat session
    Run,
    /// Start only the demo server
    Serve,
    /// Simulate a single request and print the JSON body
    Fetch {
        /// Request target, e.g. /api/models
        target: String,
        /// HTTP method of the simulated request
        #[arg(short, long, default_value = "GET")]
        method: String,
        /// Answer immediately instead of simulating latency
        #[arg(long)]
        no_latency: bool,
    },
}

/// Main entry point for the demo backend
///
/// Handles three modes of operation:
/// - Run: Starts both the demo server and an interactive chat session
/// - Serve: Starts only the demo server
/// - Fetch: Runs one simulated request without any server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config_dir {
        Some(dir) => Settings::from_dir(dir),
        None => Settings::new(),
    }
    .context("Failed to load settings")?;

    let _guard = init_logging(&settings)?;
    info!("Settings loaded");

    let latency = LatencyRange::from(&settings.latency);

    match cli.command {
        Command::Fetch { target, method, no_latency } => {
            let method = Method::from_bytes(method.to_uppercase().as_bytes())
                .with_context(|| format!("Invalid HTTP method: {}", method))?;
            let simulator = if no_latency {
                DemoSimulator::instant()
            } else {
                DemoSimulator::new(latency)
            };
            let response = simulator
                .fetch(&target, Some(&RequestOptions::new(method)))
                .await;
            println!("{}", response.text());
        }
        Command::Serve => {
            let server = ApiServer::new(
                DemoSimulator::new(latency),
                settings.server.host.clone(),
                settings.server.port,
            );
            server
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
        }
        Command::Run => {
            let server = ApiServer::new(
                DemoSimulator::new(latency),
                settings.server.host.clone(),
                settings.server.port,
            );

            // Start server in a separate task
            tokio::spawn(async move {
                if let Err(e) = server.start().await {
                    error!("Server error: {}", e);
                    eprintln!("Server error: {}", e);
                }
            });

            // Give the server a moment to start
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

            chat::chat_loop(&settings.server_url()).await?;
        }
    }

    Ok(())
}

/// Installs the tracing subscriber writing to a daily rolling log file.
///
/// `RUST_LOG` wins over the configured level when it is set.
fn init_logging(settings: &Settings) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_path = settings.logging.directory.as_deref().unwrap_or_else(|| Path::new("logs"));
    std::fs::create_dir_all(log_path)
        .with_context(|| format!("Failed to create log directory {}", log_path.display()))?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::new(
        tracing_appender::rolling::Rotation::DAILY,
        log_path,
        "webui-demo",
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        // Disable ANSI colors for cleaner log files
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_env_filter(filter)
        .init();

    let full_log_path = std::fs::canonicalize(log_path)?;
    info!("Log directory: {}", full_log_path.display());

    Ok(guard)
}
