//! `research-server` binary.
//!
//! Loads layered config, builds the Tavily-backed research agent once, and
//! serves the HTTP API until Ctrl-C or SIGTERM.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use research_server::{AppState, build_router, startup, telemetry};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "research-server")]
#[command(about = "HTTP service for search-backed company research")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Address to bind (overrides config and RESEARCH_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config and RESEARCH_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Directory holding the local research.json (defaults to the working directory)
    #[arg(long, value_name = "DIR", env = "RESEARCH_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the JSON Schema for research.json
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Schema) = cli.command {
        println!("{}", research_config::schema_json_pretty()?);
        return Ok(());
    }

    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let local_dir = match cli.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve working directory")?,
    };
    let loaded = research_config::load_merged(&local_dir).context("Failed to load config")?;

    telemetry::init(cli.verbose, &loaded.config.logging);
    for warning in &loaded.warnings {
        warn!("{warning}");
    }

    let mut config = loaded.config;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let agent = startup::research_agent(&config)
        .context("Failed to initialize the Tavily search client")?;
    info!(base_url = %config.services.tavily.base_url, "search client ready");

    let app = build_router(AppState::new(Arc::new(agent)));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("research-server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("research-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
