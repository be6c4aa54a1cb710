//! Core Intake library: the institution directory service behind the sizing
//! intake form.
//!
//! ## Layering
//!
//! Intake is organized to keep endpoint code thin and rules centralized:
//! - `api/` is the public façade; it enforces auth on mutations and maps
//!   internal errors into the public `dto::error::Error` envelope.
//! - `access/` holds the bearer-token gate consulted by mutating calls.
//! - `workflow/` implements orchestration (cascade delete, orphan
//!   reconciliation, record → view mapping).
//! - `ops/` provides mechanical, reusable side-effecting operations and the
//!   required-field rules.
//! - `storage/` owns the stable-memory documents.
//!
//! The default flow is: api → workflow → ops → storage.

pub mod access;
pub mod api;
pub mod dto;
pub mod ids;
pub mod log;
pub mod utils;

#[cfg(test)]
pub mod test;

pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod ops;
pub(crate) mod storage;
pub(crate) mod workflow;

pub(crate) use error::{InternalError, InternalErrorClass, InternalErrorOrigin};

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// init and validate config
// called from here as config is pub(crate)
pub fn init_config(toml: &str) -> Result<(), String> {
    config::Config::init_from_toml(toml)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// Return the active configuration rendered as TOML.
pub fn config_toml() -> Result<String, dto::error::Error> {
    config::Config::to_toml().map_err(dto::error::Error::from)
}
