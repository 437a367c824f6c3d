//! `opsdeck-tables` — the view-derivation pipeline.
//!
//! Every table-like view computes its visible slice the same way:
//! expansion → filter → sort → pagination, all pure over the row store's
//! current state. [`session::TableSession`] holds one view's UI controls and
//! runs the pipeline; mutations issued against displayed rows are translated
//! back to true source indices before they reach the store.

pub mod expand;
pub mod filter;
pub mod paginate;
pub mod session;
pub mod sort;

pub use expand::{DisplayRef, ExpansionConfig};
pub use paginate::{PAGE_SIZES, Paging};
pub use session::{DisplayRow, TablePage, TableSession};
pub use sort::{SortDirection, SortSpec};
