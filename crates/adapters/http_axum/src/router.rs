//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use inventory_app::ports::ItemStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the item routes with `/health` and `/openapi.json`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: ItemStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check::<S>))
        .route("/openapi.json", get(crate::openapi::serve))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    items: usize,
}

async fn health_check<S>(State(state): State<AppState<S>>) -> Result<Json<Health>, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let items = state.item_service.count_items().await?;
    Ok(Json(Health {
        status: "ok",
        items,
    }))
}
