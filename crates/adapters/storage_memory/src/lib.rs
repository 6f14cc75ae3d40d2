//! # inventory-adapter-storage-memory
//!
//! Process-local persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`ItemStore`](inventory_app::ports::ItemStore) port over a
//!   `HashMap` guarded by one `RwLock`
//! - Report a poisoned lock as a storage error instead of panicking
//!
//! Nothing survives a restart: the map is created empty and dropped with the
//! process.
//!
//! ## Dependency rule
//! Depends on `inventory-app` (for port traits) and `inventory-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod item_store;

pub use error::StorageError;
pub use item_store::InMemoryItemStore;
