//! Diagnostic logging
//!
//! `tracing` is initialised once per process. The filter comes from
//! `SPENDCARD_LOG` and defaults to `spendcard=info`. The terminal UI owns
//! the screen, so it logs to a file; the CLI logs to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{SpendError, SpendResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SPENDCARD_LOG";

const DEFAULT_FILTER: &str = "spendcard=info";

static TRACING_INIT: Once = Once::new();

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(target: LogTarget<'_>) -> SpendResult<()> {
    let mut result = Ok(());
    TRACING_INIT.call_once(|| {
        result = install(target);
    });
    result
}

fn install(target: LogTarget<'_>) -> SpendResult<()> {
    let builder = fmt().with_env_filter(env_filter());
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| SpendError::Io(format!("Failed to open log file: {}", e)))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| SpendError::Config(format!("Failed to initialise logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::new(DEFAULT_FILTER);
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }
}
