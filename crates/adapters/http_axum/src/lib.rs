//! # inventory-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the item routes (`/get-item/{itemId}`, `/create-item/{itemId}`,
//!   `/update-item/{itemId}`, `/delete-item/{itemId}`)
//! - Parse the path identifier before any service call
//! - Map application results into HTTP responses: JSON items on success,
//!   JSON-encoded strings on failure
//! - Publish the OpenAPI document a documentation browser needs
//!
//! ## Dependency rule
//! Depends on `inventory-app` (for port traits and services) and `inventory-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod openapi;
pub mod router;
pub mod state;
