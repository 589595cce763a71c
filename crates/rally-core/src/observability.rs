//! Observability wiring for the registration core.
//!
//! # Purpose
//! Initializes tracing with sensible defaults for local and production use.
//!
//! # Notes
//! Initialization is guarded by `OnceLock` to keep startup idempotent in
//! tests. Metrics and trace export are out of scope for this core; the
//! embedding service wires its own exporters around the subscriber.
use std::sync::OnceLock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static OBS_INIT: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    OBS_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer();
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}
