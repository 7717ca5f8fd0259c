//! Tracing setup
//!
//! Logs go to stderr so they never mix with report output on stdout.

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence. Without it the crate logs at `warn`, or
/// `debug` when `verbose` is set. Later calls are no-ops.
pub fn init(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let level = if verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        };

        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        // A subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_idempotent() {
        super::init(false);
        super::init(true);
        tracing::info!("still fine");
    }
}
