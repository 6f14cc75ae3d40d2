//! Item service — the four item use-cases.

use tokio::sync::Mutex;

use inventory_domain::error::{ConflictError, InventoryError, NotFoundError};
use inventory_domain::id::ItemId;
use inventory_domain::item::{Item, ValidationPolicy};

use crate::ports::ItemStore;

/// Application service for item CRUD operations.
///
/// Mutations are serialized behind a single write gate so that the existence
/// check and the write that follows it are observed as one step by every
/// other request. Reads go straight to the store.
pub struct ItemService<S> {
    store: S,
    policy: ValidationPolicy,
    write_gate: Mutex<()>,
}

impl<S: ItemStore> ItemService<S> {
    /// Create a new service backed by the given store, using the default
    /// validation policy.
    pub fn new(store: S) -> Self {
        Self::with_policy(store, ValidationPolicy::default())
    }

    /// Create a new service with an explicit validation policy.
    pub fn with_policy(store: S, policy: ValidationPolicy) -> Self {
        Self {
            store,
            policy,
            write_gate: Mutex::new(()),
        }
    }

    /// Validation policy applied to incoming payloads.
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no item with `id` exists,
    /// or a storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> Result<Item, InventoryError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Create an item at `id` from a raw JSON body.
    ///
    /// The conflict check runs before the body is decoded, so a duplicate id
    /// is reported even when the payload is also invalid.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Conflict`] if `id` is taken,
    /// [`InventoryError::PayloadMalformed`] or [`InventoryError::Validation`]
    /// for a bad body, or a storage error from the store.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_item(&self, id: ItemId, body: &[u8]) -> Result<Item, InventoryError> {
        let _guard = self.write_gate.lock().await;

        if self.store.exists(id).await? {
            return Err(ConflictError { id }.into());
        }
        let item = self.decode(body)?;
        self.store.put(id, item.clone()).await?;

        tracing::info!(%id, name = %item.name, "item created");
        Ok(item)
    }

    /// Replace the item at `id` with the one decoded from a raw JSON body.
    ///
    /// Replacement is total: fields missing from the body are reset, not
    /// merged with the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if `id` is absent,
    /// [`InventoryError::PayloadMalformed`] or [`InventoryError::Validation`]
    /// for a bad body, or a storage error from the store.
    #[tracing::instrument(skip(self, body))]
    pub async fn update_item(&self, id: ItemId, body: &[u8]) -> Result<Item, InventoryError> {
        let _guard = self.write_gate.lock().await;

        if !self.store.exists(id).await? {
            return Err(NotFoundError { id }.into());
        }
        let item = self.decode(body)?;
        self.store.put(id, item.clone()).await?;

        tracing::info!(%id, name = %item.name, "item updated");
        Ok(item)
    }

    /// Delete the item at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if `id` is absent, or a storage
    /// error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> Result<(), InventoryError> {
        let _guard = self.write_gate.lock().await;

        if !self.store.exists(id).await? {
            return Err(NotFoundError { id }.into());
        }
        self.store.delete(id).await?;

        tracing::info!(%id, "item deleted");
        Ok(())
    }

    /// Number of items currently stored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn count_items(&self) -> Result<usize, InventoryError> {
        self.store.count().await
    }

    fn decode(&self, body: &[u8]) -> Result<Item, InventoryError> {
        let item = Item::from_json(body)?;
        item.validate(self.policy)?;
        Ok(item)
    }
}
