//! Orchestration above ops: shaping records into views, the college
//! cascade, orphan reconciliation, and submission snapshots.

pub mod directory;
pub mod log;
pub mod submission;

///
/// Prelude
///

pub mod prelude {
    pub(crate) use crate::{InternalError, log, log::Topic, ops::Mutation};
}
