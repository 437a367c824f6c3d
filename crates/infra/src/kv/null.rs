//! The "boundary unavailable" adapter.
//!
//! Used when no durable medium exists (e.g. a headless run with no data
//! directory). Stores hydrate from defaults and keep state in memory only.

use crate::kv::KeyValueStore;

#[derive(Debug, Default, Clone, Copy)]
pub struct NullKv;

impl NullKv {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for NullKv {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}
