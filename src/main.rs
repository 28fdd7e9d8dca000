//! floe — a live-updating dashboard for simulated polar temperature readings.
//!
//! Run with:  `RUST_LOG=info floe`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("floe v{} starting", env!("CARGO_PKG_VERSION"));

    floe_dashboard::run().map_err(Into::into)
}
