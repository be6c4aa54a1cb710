//! Public data-transfer types: views returned to callers, inputs accepted
//! from them, and the error envelope.

pub mod directory;
pub mod error;
pub mod log;
pub mod page;
pub mod submission;

///
/// PRELUDE
///

pub mod prelude {
    pub use candid::CandidType;
    pub use serde::{Deserialize, Serialize};
}
