// Logging module - Logging infrastructure
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::error::{SenaGenError, SenaGenResult};

/// Initialize the logging system. `RUST_LOG` overrides the configured
/// level; `verbose` forces debug output.
pub fn init_logging(level: &str, verbose: bool) -> SenaGenResult<()> {
    let directive = if verbose {
        "senagen=debug".to_string()
    } else {
        format!("senagen={},warn", level)
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| SenaGenError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })
}
