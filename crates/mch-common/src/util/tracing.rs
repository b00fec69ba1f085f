use log::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{MchError, MchResult};

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` (or `info`) is used.
pub fn setup_tracing(level: Option<LevelFilter>) -> MchResult {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| MchError::Runtime(anyhow::anyhow!("Failed to set global subscriber: {err}")))
}

fn default_directive(level: Option<LevelFilter>) -> String {
    level.unwrap_or(LevelFilter::Info).to_string().to_lowercase()
}
