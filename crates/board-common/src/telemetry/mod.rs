//! Tracing subscriber setup
//!
//! `TracingConfig` picks the level, format, and span events; the `init_*`
//! functions install the global subscriber.

mod tracing_setup;

pub use tracing_setup::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
