//! JSON handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;

use axum::Router;
use axum::routing::{delete, get, post, put};

use inventory_app::ports::ItemStore;

use crate::state::AppState;

/// Build the item sub-router.
///
/// Every route carries the identifier as its last path segment.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ItemStore + Send + Sync + 'static,
{
    Router::new()
        .route("/get-item/{item_id}", get(items::get::<S>))
        .route("/create-item/{item_id}", post(items::create::<S>))
        .route("/update-item/{item_id}", put(items::update::<S>))
        .route("/delete-item/{item_id}", delete(items::delete::<S>))
}
