//! EduTracker dashboard server.
//!
//! Entry point: loads configuration, installs tracing and serves the dashboard.

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::unused_async)]

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

use edutracker::config::AppConfig;
use edutracker::dashboard::Fixtures;
use edutracker::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init(config.log.format);

    let fixtures = Fixtures::embedded()?;

    info!(
        name: "fixtures.loaded",
        applications = fixtures.applications.len(),
        communications = fixtures.communications.len(),
        recommendations = fixtures.recommendations.len(),
        "Dashboard fixtures loaded"
    );

    server::start_server(Arc::new(config), fixtures).await
}
