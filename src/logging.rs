use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

/// Logs go to stderr. Stdout carries the IPC responses and must stay clean.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| anyhow!("invalid log filter '{}': {e}", config.log_filter))?;
    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);
    let installed = match config.log_format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
