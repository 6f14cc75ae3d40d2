//! Item store port — keyed storage for items.

use std::future::Future;

use inventory_domain::error::InventoryError;
use inventory_domain::id::ItemId;
use inventory_domain::item::Item;

/// Keyed collection of [`Item`]s.
///
/// Implementations hold no policy: existence and conflict rules live in
/// [`ItemService`](crate::services::item_service::ItemService).
pub trait ItemStore {
    /// Look up an item by identifier.
    fn get(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send;

    /// Check whether an item is stored under `id`.
    fn exists(&self, id: ItemId) -> impl Future<Output = Result<bool, InventoryError>> + Send;

    /// Insert or overwrite the item stored under `id`.
    fn put(
        &self,
        id: ItemId,
        item: Item,
    ) -> impl Future<Output = Result<(), InventoryError>> + Send;

    /// Remove the item stored under `id`. Removing an absent key is a no-op.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), InventoryError>> + Send;

    /// Number of stored items.
    fn count(&self) -> impl Future<Output = Result<usize, InventoryError>> + Send;
}

impl<T: ItemStore + Send + Sync> ItemStore for std::sync::Arc<T> {
    fn get(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send {
        (**self).get(id)
    }

    fn exists(&self, id: ItemId) -> impl Future<Output = Result<bool, InventoryError>> + Send {
        (**self).exists(id)
    }

    fn put(
        &self,
        id: ItemId,
        item: Item,
    ) -> impl Future<Output = Result<(), InventoryError>> + Send {
        (**self).put(id, item)
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), InventoryError>> + Send {
        (**self).delete(id)
    }

    fn count(&self) -> impl Future<Output = Result<usize, InventoryError>> + Send {
        (**self).count()
    }
}
