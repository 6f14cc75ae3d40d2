//! # inventory-domain
//!
//! Pure domain model for the inventory service.
//!
//! ## Responsibilities
//! - Foundational types: the [`ItemId`](id::ItemId) key and error conventions
//! - Define the **Item** record (name, price, optional description)
//! - Own the field rules every stored item must satisfy
//! - Decode raw request payloads into items
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod item;
