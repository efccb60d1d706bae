//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ADMIT_LOG";

/// Default filter when `ADMIT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "admit_chance=warn";

/// Install the stderr subscriber.
///
/// Reads `ADMIT_LOG` (e.g. `ADMIT_LOG=admit_chance=debug`). Safe to call more
/// than once; only the first call installs anything.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber may already be installed when embedded in another binary.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        assert!(INIT.is_completed());
    }
}
