//! # verstrack-observability
//!
//! Subscriber installation and the span macros used around fetches and
//! aggregation.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_config};
