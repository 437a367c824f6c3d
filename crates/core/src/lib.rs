//! `opsdeck-core` — foundation building blocks for the dashboard data core.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod format;
pub mod scalar;

pub use error::{DomainError, DomainResult};
pub use format::{format_currency, format_number};
pub use scalar::Scalar;
