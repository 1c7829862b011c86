//! Console logging for applications embedding pickers.
//!
//! The picker crates only emit [`tracing`] events. Call [`install_tracing`]
//! once at startup to print them; `WATERPICK_LOG` takes an
//! [`EnvFilter`] directive such as `waterpick_form=debug`.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable read for the filter directive.
pub const LOG_ENV: &str = "WATERPICK_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Install a console subscriber (idempotent).
///
/// Does nothing when another global subscriber is already set.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let result = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();

        if result.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::install_tracing;

    #[test]
    fn installing_twice_is_harmless() {
        install_tracing();
        install_tracing();
        tracing::info!(target: "waterpick::logging", "installed");
    }
}
