use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber for hosts and tests.
///
/// Honors `RUST_LOG` when set and defaults to debug output for this
/// crate otherwise. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client_intake=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
