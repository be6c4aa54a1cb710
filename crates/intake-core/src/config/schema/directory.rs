use super::{ConfigSchemaError, Validate};
use serde::{Deserialize, Serialize};

///
/// Defaults
///

mod defaults {
    pub const fn max_name_bytes() -> usize {
        120
    }

    pub const fn max_campuses_per_college() -> u32 {
        256
    }

    pub const fn max_measurements() -> u32 {
        64
    }
}

pub const NAME_MAX_BYTES_CEILING: usize = 1_024;
pub const MEASUREMENTS_CEILING: u32 = 512;

///
/// DirectoryConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Upper bound for required text fields (names, city, batch college_id).
    #[serde(default = "defaults::max_name_bytes")]
    pub max_name_bytes: usize,

    #[serde(default = "defaults::max_campuses_per_college")]
    pub max_campuses_per_college: u32,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            max_name_bytes: defaults::max_name_bytes(),
            max_campuses_per_college: defaults::max_campuses_per_college(),
        }
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.max_name_bytes == 0 || self.max_name_bytes > NAME_MAX_BYTES_CEILING {
            return Err(ConfigSchemaError::ValidationError(format!(
                "directory.max_name_bytes {} must be within 1..={NAME_MAX_BYTES_CEILING}",
                self.max_name_bytes
            )));
        }

        if self.max_campuses_per_college == 0 {
            return Err(ConfigSchemaError::ValidationError(
                "directory.max_campuses_per_college must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

///
/// SubmissionConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SubmissionConfig {
    #[serde(default = "defaults::max_measurements")]
    pub max_measurements: u32,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_measurements: defaults::max_measurements(),
        }
    }
}

impl Validate for SubmissionConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.max_measurements > MEASUREMENTS_CEILING {
            return Err(ConfigSchemaError::ValidationError(format!(
                "submission.max_measurements {} exceeds max {MEASUREMENTS_CEILING}",
                self.max_measurements
            )));
        }

        Ok(())
    }
}
