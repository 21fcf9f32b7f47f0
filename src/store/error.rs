use thiserror::Error;

use crate::sync::EntityKind;

/// Errors surfaced by the local store.
///
/// Only write-path failures are reported. Read failures are recovered
/// internally as "absent" so a corrupt cache never blocks the caller.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to persist '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove '{key}': {source}")]
    Remove {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {kind} '{id}': {reason}")]
    InvalidEntity {
        kind: EntityKind,
        id: String,
        reason: String,
    },

    #[error("could not create data directory: {0}")]
    DataDir(#[source] std::io::Error),
}
