pub mod charts;
pub mod config;
pub mod records;
pub mod summary;
pub mod timeframes;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. Respects `RUST_LOG`; defaults to
/// `info` when unset.
pub fn setup_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Initialize tracing from the calling binary.
#[macro_export]
macro_rules! init_tracing {
    () => {
        $crate::setup_tracing()
    };
}

/// Load settings using the calling crate's manifest directory.
#[macro_export]
macro_rules! load_settings {
    () => {
        $crate::config::Settings::load(std::path::Path::new(env!("CARGO_MANIFEST_DIR")))
    };
}
