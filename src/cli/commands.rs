//! CLI command implementations.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::{ApplicationService, ApplicationStore};
use crate::observability::MetricsRegistry;
use crate::rest_api::{HttpServerConfig, RestServer};
use crate::seed;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve {
            seed,
            host,
            port,
            cors_origins,
        } => serve(&seed, host, port, cors_origins),
    }
}

/// Boot sequence: logging, seed load, store/service wiring, HTTP server.
fn serve(seed_path: &Path, host: String, port: u16, cors_origins: Vec<String>) -> CliResult<()> {
    init_tracing();

    let records = seed::load(seed_path)?;
    info!(count = records.len(), path = %seed_path.display(), "seed data loaded");

    let metrics = Arc::new(MetricsRegistry::new());
    metrics.set_applications(records.len() as u64);

    let store = Arc::new(ApplicationStore::with_records(records));
    let service = Arc::new(ApplicationService::new(store));

    let config = HttpServerConfig {
        host,
        port,
        cors_origins,
    };
    let server = RestServer::new(config, service, metrics);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

fn init_tracing() {
    // RUST_LOG wins; default to info for the crate and tower_http.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));

    // Ignored if a subscriber is already installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
