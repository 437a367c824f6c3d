//! Key-value persistence boundary.
//!
//! Contract: `get` returns the last stored string for a key (or nothing),
//! `set` overwrites the whole value. `set` is infallible at this boundary;
//! adapters log failures and drop the write, leaving callers on their
//! in-memory state.

mod file;
mod in_memory;
mod null;

pub use file::FileKv;
pub use in_memory::InMemoryKv;
pub use null::NullKv;

/// Durable string store with whole-value overwrites.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}
