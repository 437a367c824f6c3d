//! In-memory key-value store for tests and memory-only sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::kv::KeyValueStore;

#[derive(Debug, Default)]
pub struct InMemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_value() {
        let kv = InMemoryKv::new();
        kv.set("a", "1");
        assert_eq!(kv.get("a"), Some("1".to_string()));
    }

    #[test]
    fn get_of_missing_key_is_absent() {
        let kv = InMemoryKv::new();
        assert_eq!(kv.get("missing"), None);
    }

    #[test]
    fn set_overwrites_the_whole_value() {
        let kv = InMemoryKv::new();
        kv.set("a", "1");
        kv.set("a", "2");
        assert_eq!(kv.get("a"), Some("2".to_string()));
    }
}
