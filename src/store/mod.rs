//! Local entity store for offline data access.
//!
//! This module provides the `LocalStore`, a namespaced key-value persistence
//! facade over JSON files in a data directory, with typed accessors per
//! entity kind. Every mutation rewrites the full collection snapshot and
//! records an entry in the pending-sync ledger.
//!
//! Stored collections:
//! - Workout templates, plans, sessions
//! - Clients
//! - The exercise catalog
//! - The pending-sync ledger itself

pub mod error;
pub mod manager;

pub use error::StoreError;
pub use manager::{LocalStore, StoreSummary};
