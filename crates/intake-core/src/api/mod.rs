//! Public API façade.
//!
//! Thin wrappers that enforce the bearer-token gate on mutations, call into
//! workflow, and map internal errors into the public `dto::error::Error`.
//! Updates and deletes addressed by an unknown id report success.
//!
//! No orchestration or business logic should live here.

pub mod batch;
pub mod college;
pub mod error;
pub mod log;
pub mod school;
pub mod submission;

pub use batch::BatchApi;
pub use college::CollegeApi;
pub use log::LogApi;
pub use school::SchoolApi;
pub use submission::SubmissionApi;

use crate::{access::auth::require_token, dto::error::Error};

/// Gate a mutating call on the presented bearer token.
fn authorize(token: Option<&str>) -> Result<(), Error> {
    require_token(token).map_err(Error::from)
}
