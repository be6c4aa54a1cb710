mod auth;
mod directory;
mod log;

pub use auth::*;
pub use directory::*;
pub use log::*;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub directory: DirectoryConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl ConfigModel {
    /// Test-only: baseline config that accepts the shared test admin token.
    #[cfg(test)]
    #[must_use]
    pub fn test_default() -> Self {
        let mut cfg = Self::default();
        cfg.auth
            .token_sha256
            .push(crate::utils::digest::sha256_hex(crate::test::ADMIN_TOKEN.as_bytes()));
        cfg
    }
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.auth.validate()?;
        self.directory.validate()?;
        self.submission.validate()?;
        self.log.validate()?;

        Ok(())
    }
}
