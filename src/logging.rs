//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Progress for the user goes to stdout; diagnostics go to stderr through
//! `tracing`. `RUST_LOG` overrides the level picked from `--verbose`.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "price_compare={level},price_compare_common={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let filter = build_env_filter(default_level(verbose));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    // already installed (tests, repeated calls)
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
