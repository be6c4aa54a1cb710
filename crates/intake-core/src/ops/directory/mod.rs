//! Directory ops: schools, colleges with their embedded campuses, and
//! batches.

pub mod batch;
pub mod campus;
pub mod college;
pub mod school;

use crate::{
    InternalError, InternalErrorOrigin,
    config::Config,
    ids::{EntityId, EntityKind},
    ops::field::FieldError,
};
use thiserror::Error as ThisError;

///
/// DirectoryOpsError
///

#[derive(Debug, ThisError)]
pub enum DirectoryOpsError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("college {college} already holds {max} campuses")]
    CampusLimitReached { college: EntityId, max: u32 },

    #[error("college {0} campus id space exhausted")]
    CampusIdExhausted(EntityId),
}

impl DirectoryOpsError {
    pub(crate) fn not_found(kind: EntityKind, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<DirectoryOpsError> for InternalError {
    fn from(err: DirectoryOpsError) -> Self {
        match err {
            DirectoryOpsError::Field(err) => err.into(),
            DirectoryOpsError::NotFound { .. } => {
                Self::not_found(InternalErrorOrigin::Ops, err.to_string())
            }
            DirectoryOpsError::CampusLimitReached { .. }
            | DirectoryOpsError::CampusIdExhausted(_) => {
                Self::exhausted(InternalErrorOrigin::Ops, err.to_string())
            }
        }
    }
}

/// Byte ceiling applied to required directory fields.
pub(crate) fn max_name_bytes() -> Result<usize, InternalError> {
    Ok(Config::get()?.directory.max_name_bytes)
}

/// Order records by creation time, falling back to allocation order.
pub(crate) fn sort_by_creation<T>(records: &mut [T], key: impl Fn(&T) -> (u64, EntityId)) {
    records.sort_by_key(key);
}
