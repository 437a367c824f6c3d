//! Change-notification plumbing for the dashboard stores.
//!
//! Stores publish a message after every mutation; views subscribe and
//! re-derive their state on receipt. Delivery is best-effort fan-out, which is
//! all a single-process UI needs.

pub mod bus;
pub mod in_memory_bus;

pub use bus::{ChangeBus, Subscription};
pub use in_memory_bus::InMemoryChangeBus;
