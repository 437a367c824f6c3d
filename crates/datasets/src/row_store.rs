//! Persistent row store.
//!
//! Owns the authoritative row sequence per dataset. State is hydrated from
//! the key-value boundary at construction and written back after every
//! mutation, so callers always read their own writes while durability stays
//! best-effort.

use std::collections::BTreeMap;
use std::sync::Arc;

use opsdeck_events::{ChangeBus, InMemoryChangeBus, Subscription};
use opsdeck_infra::KeyValueStore;

use crate::descriptor::Row;
use crate::registry::DatasetRegistry;

/// Persistence key for the serialized rows-by-dataset mapping.
pub const ROWS_KEY: &str = "opsdeck.datasets.rows";

/// Notification published after a successful row mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowsChanged {
    pub dataset_id: String,
}

/// Authoritative per-dataset row collection.
pub struct RowStore {
    registry: DatasetRegistry,
    rows: BTreeMap<String, Vec<Row>>,
    kv: Arc<dyn KeyValueStore>,
    bus: InMemoryChangeBus<RowsChanged>,
}

impl RowStore {
    /// Hydrate a store from the persistence boundary.
    ///
    /// Missing or unreadable state falls back to the registry defaults; a
    /// malformed entry for one dataset never affects the others. Stored ids
    /// the registry does not know are dropped.
    pub fn hydrate(registry: DatasetRegistry, kv: Arc<dyn KeyValueStore>) -> Self {
        let stored = load_stored(kv.as_ref());

        let mut rows = BTreeMap::new();
        for dataset in registry.iter() {
            let dataset_rows = stored
                .as_ref()
                .and_then(|map| map.get(dataset.id()))
                .and_then(|value| parse_rows(dataset.id(), value))
                .unwrap_or_else(|| dataset.rows().to_vec());
            rows.insert(dataset.id().to_string(), dataset_rows);
        }

        Self {
            registry,
            rows,
            kv,
            bus: InMemoryChangeBus::new(),
        }
    }

    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    /// Current rows for a dataset; empty for unknown ids.
    pub fn rows(&self, dataset_id: &str) -> &[Row] {
        self.rows
            .get(dataset_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Shallow-merge `patch` into the row at `index`.
    ///
    /// Patch keys outside the dataset's columns are dropped; an unknown
    /// dataset or out-of-range index is a logged no-op.
    pub fn replace_row(&mut self, dataset_id: &str, index: usize, patch: Row) {
        let Some(descriptor) = self.registry.get(dataset_id) else {
            tracing::debug!(dataset_id, "replace_row on unknown dataset ignored");
            return;
        };

        let mut patch = patch;
        patch.retain(|key, _| {
            let known = descriptor.has_column(key);
            if !known {
                tracing::debug!(dataset_id, column = key.as_str(), "dropping unknown patch column");
            }
            known
        });

        let Some(row) = self
            .rows
            .get_mut(dataset_id)
            .and_then(|rows| rows.get_mut(index))
        else {
            tracing::debug!(dataset_id, index, "replace_row out of range, ignored");
            return;
        };

        for (key, value) in patch {
            row.insert(key, value);
        }

        self.persist();
        self.notify(dataset_id);
    }

    /// Remove the row at `index` when it is in range; no-op otherwise.
    pub fn delete_row(&mut self, dataset_id: &str, index: usize) {
        let Some(rows) = self.rows.get_mut(dataset_id) else {
            tracing::debug!(dataset_id, "delete_row on unknown dataset ignored");
            return;
        };
        if index >= rows.len() {
            tracing::debug!(dataset_id, index, "delete_row out of range, ignored");
            return;
        }

        rows.remove(index);
        self.persist();
        self.notify(dataset_id);
    }

    /// Subscribe to mutation notifications.
    pub fn subscribe(&self) -> Subscription<RowsChanged> {
        self.bus.subscribe()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.rows) {
            Ok(payload) => self.kv.set(ROWS_KEY, &payload),
            Err(err) => tracing::warn!("failed to serialize rows, skipping persist: {err}"),
        }
    }

    fn notify(&self, dataset_id: &str) {
        self.bus.publish(RowsChanged {
            dataset_id: dataset_id.to_string(),
        });
    }
}

/// Read and parse the stored mapping; anything that is not a JSON object is
/// treated as absent.
fn load_stored(kv: &dyn KeyValueStore) -> Option<serde_json::Map<String, serde_json::Value>> {
    let raw = kv.get(ROWS_KEY)?;
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::Object(map)) => Some(map),
        Ok(other) => {
            tracing::warn!(
                "stored rows payload is {} instead of an object, using defaults",
                json_kind(&other)
            );
            None
        }
        Err(err) => {
            tracing::warn!("stored rows payload is not valid JSON, using defaults: {err}");
            None
        }
    }
}

/// Parse one dataset's stored rows; `None` means "fall back to defaults".
fn parse_rows(dataset_id: &str, value: &serde_json::Value) -> Option<Vec<Row>> {
    match serde_json::from_value::<Vec<Row>>(value.clone()) {
        Ok(rows) => Some(rows),
        Err(err) => {
            tracing::warn!(dataset_id, "stored rows malformed, using defaults: {err}");
            None
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
