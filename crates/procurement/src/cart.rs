//! Procurement cart store.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opsdeck_events::{ChangeBus, InMemoryChangeBus, Subscription};
use opsdeck_infra::KeyValueStore;

/// Persistence key for the serialized cart.
pub const CART_KEY: &str = "opsdeck.procurement.list";

/// Stock posture of a catalog item at the time it was suggested for reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    High,
    Overstock,
    Normal,
}

/// A cart line: one catalog item plus the user-editable order quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub current_stock: u32,
    pub suggested_order: u32,
    pub status: StockStatus,
    pub price: f64,
    pub order_qty: u32,
    pub added_at: DateTime<Utc>,
}

/// Catalog item proposed for the cart. `order_qty` and `added_at` are
/// assigned by the store on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct CartCandidate {
    pub id: String,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub current_stock: u32,
    pub suggested_order: u32,
    pub status: StockStatus,
    pub price: f64,
}

/// Notification published after a successful cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartChanged;

/// Insertion-ordered, id-deduplicated reorder list.
pub struct ProcurementCart {
    items: Vec<ProcurementItem>,
    ids: HashSet<String>,
    kv: Arc<dyn KeyValueStore>,
    bus: InMemoryChangeBus<CartChanged>,
}

impl ProcurementCart {
    /// Hydrate the cart from the persistence boundary.
    ///
    /// Missing or malformed state yields an empty cart. Duplicate ids in a
    /// stored payload keep their first occurrence.
    pub fn hydrate(kv: Arc<dyn KeyValueStore>) -> Self {
        let mut items = match kv.get(CART_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<ProcurementItem>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!("stored cart malformed, starting empty: {err}");
                    Vec::new()
                }
            },
        };

        let mut ids = HashSet::new();
        items.retain(|item| ids.insert(item.id.clone()));

        Self {
            items,
            ids,
            kv,
            bus: InMemoryChangeBus::new(),
        }
    }

    pub fn items(&self) -> &[ProcurementItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// O(1) membership check against the current cart.
    pub fn is_added(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Insert a candidate with `order_qty` defaulted to its suggested order.
    ///
    /// Idempotent: a second add with the same id is a no-op. Returns whether
    /// the candidate was inserted.
    pub fn add(&mut self, candidate: CartCandidate) -> bool {
        if self.ids.contains(&candidate.id) {
            tracing::debug!(id = candidate.id.as_str(), "item already in cart, add ignored");
            return false;
        }

        self.ids.insert(candidate.id.clone());
        self.items.push(ProcurementItem {
            order_qty: candidate.suggested_order,
            added_at: Utc::now(),
            id: candidate.id,
            name: candidate.name,
            category: candidate.category,
            manufacturer: candidate.manufacturer,
            current_stock: candidate.current_stock,
            suggested_order: candidate.suggested_order,
            status: candidate.status,
            price: normalize_price(candidate.price),
        });

        self.persist();
        self.notify();
        true
    }

    /// Set the order quantity for an item, normalizing the input to a
    /// non-negative integer. Unknown ids are a no-op.
    pub fn update_order_qty(&mut self, id: &str, value: f64) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(id, "update_order_qty for unknown item ignored");
            return;
        };

        item.order_qty = normalize_qty(value);
        self.persist();
        self.notify();
    }

    /// Remove one item; unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        if !self.ids.remove(id) {
            tracing::debug!(id, "remove for unknown item ignored");
            return;
        }

        self.items.retain(|item| item.id != id);
        self.persist();
        self.notify();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.items.clear();
        self.ids.clear();
        self.persist();
        self.notify();
    }

    /// Sum of order quantities. Derived on every call, never stored.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.order_qty)).sum()
    }

    /// Sum of `order_qty * price`. Derived on every call, never stored.
    pub fn total_amount(&self) -> f64 {
        self.items
            .iter()
            .map(|item| f64::from(item.order_qty) * item.price)
            .sum()
    }

    /// Subscribe to mutation notifications.
    pub fn subscribe(&self) -> Subscription<CartChanged> {
        self.bus.subscribe()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(payload) => self.kv.set(CART_KEY, &payload),
            Err(err) => tracing::warn!("failed to serialize cart, skipping persist: {err}"),
        }
    }

    fn notify(&self) {
        self.bus.publish(CartChanged);
    }
}

/// Clamp a quantity input to a non-negative integer: NaN and negatives become
/// 0, fractional values are floored.
fn normalize_qty(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.floor().max(0.0) as u32
}

fn normalize_price(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
