//! repcache - offline-first local data store for a fitness-coaching app.
//!
//! The mobile screens read and write everything through this layer: typed
//! collections of workout templates, plans, sessions, clients and the
//! exercise catalog, persisted as JSON under a single data directory.
//! Every mutation is also recorded in a pending-sync ledger, keyed by
//! (entity kind, entity id), so a future sync worker can reconcile the
//! device with the remote backend.
//!
//! Entry points:
//! - [`store::LocalStore`]: the persistence facade and typed accessors
//! - [`config::Config`]: data directory resolution
//! - [`auth::Session`]: the locally persisted signed-in profile

pub mod auth;
pub mod config;
pub mod models;
pub mod seed;
pub mod store;
pub mod sync;
pub mod utils;

pub use config::Config;
pub use store::{LocalStore, StoreError, StoreSummary};
pub use sync::{EntityKind, SyncAction, SyncLedgerEntry};
