//! Console logging for the CLI and the HTTP server.
//!
//! Log records go to stderr so that reports written to stdout stay clean.
//! `RUST_LOG` overrides the default level. Records emitted through the `log`
//! facade by `polefiber_core` are forwarded to the same subscriber.

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}
