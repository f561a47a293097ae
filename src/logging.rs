//! Tracing setup
//!
//! The library only emits events; binaries and tests opt in to a subscriber.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global fmt subscriber, honouring `RUST_LOG`.
///
/// Safe to call more than once. If another subscriber is already installed
/// the call leaves it in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "income_list=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt().with_env_filter(filter).try_init();
        tracing::debug!("income_list tracing initialized");
    });
}
