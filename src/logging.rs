// src/logging.rs
// =============================================================================
// Diagnostic logging.
//
// Normal output (the raw URL, the usage text, the "Error: ..." line) is
// printed directly by the CLI and never goes through here. Logging only adds
// debug detail when someone asks for it:
//
//   RUST_LOG=ghlink2raw=debug ghlink2raw https://github.com/...
//
// Without RUST_LOG the filter is "warn", and nothing in this crate logs at
// warn or above, so stderr stays byte-for-byte clean.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Fails if a global subscriber is already set.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // The subscriber is process-global and other tests may have set it
        // already, so the first call can go either way. After it, one is
        // installed for sure and any further call must fail.
        let _ = init_logging();
        let second = init_logging();
        assert!(second.is_err());
    }
}
