//! In-memory implementation of [`ItemStore`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use inventory_app::ports::ItemStore;
use inventory_domain::error::InventoryError;
use inventory_domain::id::ItemId;
use inventory_domain::item::Item;

use crate::error::StorageError;

type Items = HashMap<ItemId, Item>;

/// `HashMap`-backed item store.
///
/// Every operation completes under the lock before its future is returned,
/// so no guard is ever held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Items>,
}

impl InMemoryItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Items>, StorageError> {
        self.items.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Items>, StorageError> {
        self.items.write().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StorageError {
    tracing::error!("item store lock poisoned");
    StorageError::Poisoned
}

impl ItemStore for InMemoryItemStore {
    fn get(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send {
        let result = self.read().map(|items| items.get(&id).cloned());
        async move { Ok(result?) }
    }

    fn exists(&self, id: ItemId) -> impl Future<Output = Result<bool, InventoryError>> + Send {
        let result = self.read().map(|items| items.contains_key(&id));
        async move { Ok(result?) }
    }

    fn put(
        &self,
        id: ItemId,
        item: Item,
    ) -> impl Future<Output = Result<(), InventoryError>> + Send {
        let result = self.write().map(|mut items| {
            items.insert(id, item);
        });
        async move { Ok(result?) }
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), InventoryError>> + Send {
        let result = self.write().map(|mut items| {
            items.remove(&id);
        });
        async move { Ok(result?) }
    }

    fn count(&self) -> impl Future<Output = Result<usize, InventoryError>> + Send {
        let result = self.read().map(|items| items.len());
        async move { Ok(result?) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn item(name: &str) -> Item {
        Item::builder().name(name).price(1.0).build().unwrap()
    }

    #[tokio::test]
    async fn should_start_empty() {
        let store = InMemoryItemStore::new();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(!store.exists(ItemId::new(0)).await.unwrap());
        assert!(store.get(ItemId::new(0)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_item_after_put() {
        let store = InMemoryItemStore::new();
        let id = ItemId::new(4);
        store.put(id, item("Drill")).await.unwrap();

        assert!(store.exists(id).await.unwrap());
        assert_eq!(store.get(id).await.unwrap(), Some(item("Drill")));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_overwrite_existing_item_on_put() {
        let store = InMemoryItemStore::new();
        let id = ItemId::new(4);
        store.put(id, item("Drill")).await.unwrap();
        store.put(id, item("Driver")).await.unwrap();

        assert_eq!(store.get(id).await.unwrap(), Some(item("Driver")));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_remove_item_on_delete() {
        let store = InMemoryItemStore::new();
        let id = ItemId::new(4);
        store.put(id, item("Drill")).await.unwrap();
        store.delete(id).await.unwrap();

        assert!(!store.exists(id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_ignore_delete_of_absent_key() {
        let store = InMemoryItemStore::new();
        store.put(ItemId::new(1), item("Drill")).await.unwrap();

        store.delete(ItemId::new(2)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_report_storage_error_when_lock_poisoned() {
        let store = InMemoryItemStore::new();
        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = store.items.write().unwrap();
            panic!("writer crashed");
        }));

        let result = store.get(ItemId::new(1)).await;
        assert!(matches!(result, Err(InventoryError::Storage(_))));
        let result = store.put(ItemId::new(1), item("Drill")).await;
        assert!(matches!(result, Err(InventoryError::Storage(_))));
    }
}
