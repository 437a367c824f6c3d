//! `opsdeck-procurement` — the reorder shortlist.
//!
//! A deduplicated, user-editable list of catalog items proposed for reorder,
//! persisted whole under its own key and independent of the dataset row store.

pub mod cart;

pub use cart::{
    CART_KEY, CartCandidate, CartChanged, ProcurementCart, ProcurementItem, StockStatus,
};
