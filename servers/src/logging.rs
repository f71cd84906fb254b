//! Tracing subscriber bootstrap for the server binaries.
//!
//! The level is controlled by `RUST_LOG`:
//!
//! ```bash
//! # request spans from the trace layer
//! RUST_LOG=mini_servers=debug,tower_http=debug cargo run --bin todo-server
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Defaults to `info` when `RUST_LOG` is unset
/// or unparseable. Calling it again after a subscriber is installed is a
/// no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
