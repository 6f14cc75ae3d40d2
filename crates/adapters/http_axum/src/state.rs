//! Shared application state for axum handlers.

use std::sync::Arc;

use inventory_app::ports::ItemStore;
use inventory_app::services::item_service::ItemService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone`.
pub struct AppState<S> {
    /// Item CRUD service.
    pub item_service: Arc<ItemService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            item_service: Arc::clone(&self.item_service),
        }
    }
}

impl<S> AppState<S>
where
    S: ItemStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(item_service: ItemService<S>) -> Self {
        Self::from_arc(Arc::new(item_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also needed outside the HTTP layer,
    /// e.g. for the shutdown summary.
    pub fn from_arc(item_service: Arc<ItemService<S>>) -> Self {
        Self { item_service }
    }
}
