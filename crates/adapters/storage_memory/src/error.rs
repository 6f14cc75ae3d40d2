//! Storage-specific error type.

use inventory_domain::error::InventoryError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the store lock.
    #[error("item store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for InventoryError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
