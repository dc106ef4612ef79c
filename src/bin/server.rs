//! Attrition analytics HTTP server
//!
//! Loads the employee dataset once at startup, then serves the query engine
//! over a small REST surface.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/filters` - Filterable attribute domains
//! - `GET /api/{query}` - One of the eleven registered queries, filterable
//!   with `gender`, `department`, `job_role`, and `education` parameters
//!
//! # CLI Commands
//!
//! - `start` - Start the HTTP server (default if no command specified)
//! - `check-config` - Validate configuration file
//!
//! # Configuration
//!
//! The server reads configuration from:
//! 1. `HR_CONFIG` environment variable (path to TOML file)
//! 2. `./attrition.toml` in current directory
//! 3. Default configuration

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{debug, info, warn};

use attrition_engine::http::{build_router, AppState};
use attrition_engine::{Config, QueryEngine, RecordStore};

/// Attrition analytics engine - interactive HR dashboard backend
#[derive(Parser)]
#[command(name = "attrition-server")]
#[command(version)]
#[command(about = "In-memory filter-and-aggregate engine for HR attrition analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file (overrides HR_CONFIG env var)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Override listen address (e.g., 0.0.0.0:8000)
    #[arg(short, long, global = true)]
    listen: Option<String>,

    /// Override dataset path
    #[arg(short, long, global = true)]
    data: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Start,

    /// Validate configuration file without starting the server
    CheckConfig,
}

/// Graceful shutdown on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                warn!(error = %e, "Ctrl+C handler installation failed - graceful shutdown unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler installation failed - SIGTERM shutdown unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}

fn resolve_config(cli: &Cli) -> Result<Config, attrition_engine::Error> {
    if let Some(path) = &cli.config {
        std::env::set_var("HR_CONFIG", path);
    }

    let mut config = Config::resolve()?;
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen.clone();
    }
    if let Some(data) = &cli.data {
        config.dataset.path = data.clone();
    }
    config.validate()?;
    Ok(config)
}

fn cmd_check_config(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(cli)?;

    println!("Configuration is valid!");
    println!();
    println!("Server Settings:");
    println!("  Listen address: {}", config.server.listen_addr);
    println!("  CORS origins: {:?}", config.server.cors_allowed_origins);
    println!();
    println!("Dataset:");
    println!("  Path: {:?}", config.dataset.path);
    println!();
    println!("Monitoring:");
    println!("  Log level: {}", config.monitoring.log_level);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Commands::CheckConfig) = &cli.command {
        return cmd_check_config(&cli);
    }

    let config = resolve_config(&cli)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.monitoring.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting attrition analytics server v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        listen_addr = %config.server.listen_addr,
        dataset = ?config.dataset.path,
        "configuration resolved"
    );

    // Fail fast: the process must not serve traffic over a partial store.
    let store = RecordStore::load(&config.dataset.path)?;
    let engine = QueryEngine::new(Arc::new(store));

    let state = Arc::new(AppState { engine });
    let app = build_router(state, &config.server.cors_allowed_origins);

    let addr: SocketAddr = config.server.listen_addr.parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
