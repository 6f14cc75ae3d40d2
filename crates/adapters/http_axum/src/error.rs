//! HTTP error response mapping.
//!
//! Failures are answered with a JSON-encoded string body (e.g.
//! `"Invalid item ID"`), the wire format existing clients already parse.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use inventory_domain::error::{IdError, InventoryError};

/// Which operation produced a [`InventoryError::NotFound`]; lookups and
/// mutations word the 404 differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Lookup,
    Mutation,
}

/// Maps [`InventoryError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError {
    source: InventoryError,
    context: Context,
}

impl ApiError {
    /// Wrap an error raised while reading an item.
    #[must_use]
    pub fn lookup(source: InventoryError) -> Self {
        Self {
            source,
            context: Context::Lookup,
        }
    }

    /// Status code and string body sent to the client.
    #[must_use]
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match (&self.source, self.context) {
            (InventoryError::InvalidIdentifier(_), _) => {
                (StatusCode::BAD_REQUEST, "Invalid item ID")
            }
            (InventoryError::PayloadMalformed(_), _) => (StatusCode::BAD_REQUEST, "Invalid JSON"),
            (InventoryError::Validation(_), _) => (StatusCode::BAD_REQUEST, "Validation error"),
            (InventoryError::Conflict(_), _) => {
                (StatusCode::BAD_REQUEST, "Item ID already exists")
            }
            (InventoryError::NotFound(_), Context::Lookup) => {
                (StatusCode::NOT_FOUND, "Item ID not found")
            }
            (InventoryError::NotFound(_), Context::Mutation) => {
                (StatusCode::NOT_FOUND, "Item ID does not exist")
            }
            (InventoryError::Storage(_), _) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(source: InventoryError) -> Self {
        Self {
            source,
            context: Context::Mutation,
        }
    }
}

impl From<IdError> for ApiError {
    fn from(err: IdError) -> Self {
        Self::from(InventoryError::from(err))
    }
}

/// A path segment the extractor could not hand over as a string (e.g.
/// percent-encoded bytes that are not UTF-8) is just another bad identifier.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::from(IdError::Unreadable(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = ?self.source, "request failed");
        } else {
            tracing::debug!(error = %self.source, %status, "request rejected");
        }

        (status, Json(message)).into_response()
    }
}
