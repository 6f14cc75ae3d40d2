//! # inventory-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `ItemStore` — keyed get / exists / put / delete
//! - Define the **driving/inbound** use-case struct:
//!   - `ItemService` — get, create, update, delete an item by identifier
//! - Enforce existence and conflict rules, and make every check-then-mutate
//!   sequence atomic with respect to other requests
//!
//! ## Dependency rule
//! Depends on `inventory-domain` only (plus `tokio::sync` for the write gate).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
