//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`InventoryError`] via `#[from]`.

use std::num::ParseIntError;

use crate::id::ItemId;

/// Top-level error for every item operation.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("invalid item identifier")]
    InvalidIdentifier(#[from] IdError),

    #[error("malformed item payload")]
    PayloadMalformed(#[from] serde_json::Error),

    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a path segment is not a usable [`ItemId`].
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("item identifier is not a base-10 integer")]
    Parse(#[from] ParseIntError),

    #[error("item identifier {0} is negative")]
    Negative(i64),

    #[error("item identifier could not be extracted: {0}")]
    Unreadable(String),
}

/// Field rule violations on an [`Item`](crate::item::Item).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("price is required")]
    MissingPrice,
}

/// Attempt to create an item at an identifier that already holds one.
#[derive(Debug, thiserror::Error)]
#[error("item {id} already exists")]
pub struct ConflictError {
    pub id: ItemId,
}

/// Operation targeting an identifier with no stored item.
#[derive(Debug, thiserror::Error)]
#[error("item {id} not found")]
pub struct NotFoundError {
    pub id: ItemId,
}
