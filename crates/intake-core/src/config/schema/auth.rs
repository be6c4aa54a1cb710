use super::{ConfigSchemaError, Validate};
use crate::utils::digest::is_sha256_hex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// AuthConfig
///
/// Bearer tokens are issued outside this service; only their SHA-256 digests
/// are configured here.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default)]
    pub token_sha256: Vec<String>,
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        let mut seen = BTreeSet::new();

        for digest in &self.token_sha256 {
            if !is_sha256_hex(digest) {
                return Err(ConfigSchemaError::ValidationError(format!(
                    "auth.token_sha256 entry '{digest}' is not a hex sha256 digest"
                )));
            }

            if !seen.insert(digest.to_ascii_lowercase()) {
                return Err(ConfigSchemaError::ValidationError(format!(
                    "auth.token_sha256 entry '{digest}' is listed twice"
                )));
            }
        }

        Ok(())
    }
}
