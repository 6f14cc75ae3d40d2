//! JSON handlers for items.
//!
//! The raw path segment is parsed into an [`ItemId`] before the service is
//! called, so an invalid identifier never reaches the store. Segments the path
//! extractor rejects get the same answer as unparseable ones. Bodies are taken
//! as raw bytes and decoded by the service, after its existence check.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use inventory_app::ports::ItemStore;
use inventory_domain::id::ItemId;
use inventory_domain::item::Item;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned by a successful delete.
pub const DELETED: &str = "Item deleted";

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Item>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
///
/// Answers `200 OK` rather than `201 Created`; clients key on 200.
pub enum CreateResponse {
    Ok(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Item>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(DELETED).into_response(),
        }
    }
}

/// `GET /get-item/{itemId}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    item_id: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let Path(item_id) = item_id?;
    let id: ItemId = item_id.parse()?;
    let item = state
        .item_service
        .get_item(id)
        .await
        .map_err(ApiError::lookup)?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `POST /create-item/{itemId}`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    item_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let Path(item_id) = item_id?;
    let id: ItemId = item_id.parse()?;
    let item = state.item_service.create_item(id, &body).await?;
    Ok(CreateResponse::Ok(Json(item)))
}

/// `PUT /update-item/{itemId}`
pub async fn update<S>(
    State(state): State<AppState<S>>,
    item_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let Path(item_id) = item_id?;
    let id: ItemId = item_id.parse()?;
    let item = state.item_service.update_item(id, &body).await?;
    Ok(UpdateResponse::Ok(Json(item)))
}

/// `DELETE /delete-item/{itemId}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    item_id: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let Path(item_id) = item_id?;
    let id: ItemId = item_id.parse()?;
    state.item_service.delete_item(id).await?;
    Ok(DeleteResponse::Deleted)
}
