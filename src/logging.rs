//! Tracing setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Levels come from `PARK_REVIEWS_LOG` (for example
/// `PARK_REVIEWS_LOG=park_reviews::loader=debug`), falling back to
/// `park_reviews=warn`. Output goes to stderr so it never mixes with menus.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PARK_REVIEWS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("park_reviews=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
