//! `opsdeck-infra` — persistence adapters.
//!
//! The stores see one boundary: a string key-value store with whole-value
//! overwrites. Adapters degrade silently; a broken or missing medium leaves
//! the stores running on in-memory state.

pub mod kv;

pub use kv::{FileKv, InMemoryKv, KeyValueStore, NullKv};
