//! Log output setup.
//!
//! Events go to stderr so stdout carries only the picking sheet.
//!
//! Filter precedence:
//! - `PICKLIST_LOG` environment variable (e.g. "debug", "picklist=trace")
//! - the level passed by the caller (CLI flag or settings file)

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "PICKLIST_LOG";

/// Install the global subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();

    if installed.is_err() {
        tracing::debug!("Log subscriber already installed; keeping it");
    }
}
