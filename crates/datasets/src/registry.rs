//! Dataset registry: the ordered, read-only catalog of datasets.

use opsdeck_core::{DomainError, DomainResult};

use crate::descriptor::DatasetDescriptor;

/// Ordered collection of dataset descriptors with unique ids.
///
/// Read-only after construction; the row store hydrates from it and falls
/// back to it when persisted state is missing or corrupt.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRegistry {
    datasets: Vec<DatasetDescriptor>,
}

impl DatasetRegistry {
    pub fn new(datasets: Vec<DatasetDescriptor>) -> DomainResult<Self> {
        for (i, dataset) in datasets.iter().enumerate() {
            if datasets[..i].iter().any(|d| d.id() == dataset.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate dataset id {:?}",
                    dataset.id()
                )));
            }
        }
        Ok(Self { datasets })
    }

    pub fn get(&self, id: &str) -> Option<&DatasetDescriptor> {
        self.datasets.iter().find(|d| d.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatasetDescriptor> {
        self.datasets.iter()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
