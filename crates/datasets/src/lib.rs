//! `opsdeck-datasets` — dataset descriptors and the persistent row store.
//!
//! The registry describes what datasets exist (columns, preview columns,
//! default rows); the row store owns the current rows per dataset and keeps
//! them durable through the key-value boundary.

pub mod descriptor;
pub mod registry;
pub mod row_store;

pub use descriptor::{DatasetDescriptor, Row};
pub use registry::DatasetRegistry;
pub use row_store::{ROWS_KEY, RowStore, RowsChanged};
