//! `opsdeck-observability` — logging setup for hosts of the data core.

pub mod tracing;

pub use tracing::init;
