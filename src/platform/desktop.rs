//! Desktop platform implementation.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::error::{GameResult, PlatformError};
use crate::formatter::CustomFormatter;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logging() -> GameResult<()> {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .event_format(CustomFormatter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::LoggingInit(format!("Failed to set tracing subscriber: {}", e)))?;
    Ok(())
}

/// Sleeps for the remainder of a tick with sub-millisecond accuracy.
pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

/// The RNG used for entity placement.
pub fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
