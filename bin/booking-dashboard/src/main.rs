// SPDX-License-Identifier: AGPL-3.0-only
// Minimal bootstrap; handlers and rendering live in the sibling modules.
use anyhow::Result;
use clap::{Parser, Subcommand};
use staylens::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

mod config;
mod page;
mod routes;
mod state;

use config::ServerConfig;
use state::AppState;

#[derive(Parser, Debug, Clone)]
#[command(name = "booking-dashboard", about = "Hotel bookings dashboard server")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    Serve {
        /// Path to the bookings CSV; falls back to BD_DATA_PATH.
        #[arg(long)]
        data: Option<PathBuf>,
        /// Listen address; falls back to BD_HTTP_ADDR.
        #[arg(long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Command::Serve {
        data: None,
        addr: None,
    }) {
        Command::Serve { data, addr } => run_server(data, addr).await,
    }
}

async fn run_server(data: Option<PathBuf>, addr: Option<String>) -> Result<()> {
    info!("booking-dashboard starting");
    let cfg = ServerConfig::resolve(addr, data)?;

    // The dataset is the whole process; refusing to start without it is
    // the contract.
    let dataset = match Dataset::load(&cfg.data_path) {
        Ok(d) => Arc::new(d),
        Err(e) => {
            error!(path = %cfg.data_path.display(), error = %e, "dataset load failed");
            anyhow::bail!("cannot start without dataset: {e}");
        }
    };
    info!(
        rows = dataset.metadata().row_count,
        countries = dataset.distinct_countries().len(),
        "dataset resident"
    );

    let state = AppState::new(dataset);
    let app = routes::build_router(state);
    let listener = match tokio::net::TcpListener::bind(cfg.http_addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!(error = %e, addr = %cfg.http_addr, "bind failed, using ephemeral");
            tokio::net::TcpListener::bind("127.0.0.1:0").await?
        }
    };
    let local = listener.local_addr()?;
    info!(%local, "dashboard listening");

    tokio::select! { _ = axum::serve(listener, app) => {} _ = tokio::signal::ctrl_c() => {} }
    info!("booking-dashboard shutting down");
    Ok(())
}
