//! Persistent state model.
//!
//! This module owns the documents stored in stable memory. It holds data and
//! mechanical access only; required-field rules live in `ops` and
//! orchestration (cascade, reconciliation) lives in `workflow`.

pub mod stable;

use crate::{
    InternalError, InternalErrorOrigin, ids::EntityId, ids::EntityKind, utils::codec::CodecError,
};
use thiserror::Error as ThisError;

///
/// StorageError
///

#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("{kind} document {id} could not be encoded: {source}")]
    Encode {
        kind: EntityKind,
        id: EntityId,
        source: CodecError,
    },

    #[error("{kind} document {id} could not be decoded: {source}")]
    Decode {
        kind: EntityKind,
        id: EntityId,
        source: CodecError,
    },

    #[error("{0} id space exhausted")]
    IdSpaceExhausted(EntityKind),

    #[error("log entry could not be encoded: {0}")]
    LogEncode(CodecError),

    #[error("log write failed: current_size={current_size}, delta={delta}")]
    LogWriteFailed { current_size: u64, delta: u64 },
}

impl From<StorageError> for InternalError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::IdSpaceExhausted(_) => {
                Self::exhausted(InternalErrorOrigin::Storage, err.to_string())
            }
            _ => Self::store(InternalErrorOrigin::Storage, err.to_string()),
        }
    }
}
