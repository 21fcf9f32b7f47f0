//! Pending-sync ledger types.
//!
//! Every local mutation is recorded as a `SyncLedgerEntry` keyed by
//! (entity kind, entity id). The ledger holds at most one entry per key:
//! it reflects the current intended state change for each entity, not an
//! operation history. A future sync worker drains it against the remote
//! backend; this crate only does the bookkeeping.

pub mod ledger;

pub use ledger::{EntityKind, SyncAction, SyncLedgerEntry};
