//! Shared setup for integration tests.

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;

static TRACING: Once = Once::new();

/// Routes encoder `tracing` events to the test output at debug level.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_test_writer()
            .try_init();
    });
}
