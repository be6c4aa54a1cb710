use super::{ConfigSchemaError, Validate};
use serde::{Deserialize, Serialize};

mod defaults {
    pub const fn max_entries() -> u64 {
        10_000
    }

    pub const fn max_entry_bytes() -> u32 {
        16_384
    }

    pub const fn sweep_slack() -> u64 {
        100
    }
}

pub const LOG_ENTRIES_CEILING: u64 = 100_000;
pub const LOG_ENTRY_BYTES_CEILING: u32 = 65_536;

///
/// LogConfig
///
/// `max_entries` is the steady-state size of the stable log. Appends let it
/// overshoot by `sweep_slack` entries before a sweep rewrites it back down,
/// so the rewrite cost is paid once per `sweep_slack` appends.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_field_names)]
pub struct LogConfig {
    #[serde(default = "defaults::max_entries")]
    pub max_entries: u64,

    #[serde(default = "defaults::max_entry_bytes")]
    pub max_entry_bytes: u32,

    #[serde(default)]
    pub max_age_secs: Option<u64>,

    #[serde(default = "defaults::sweep_slack")]
    pub sweep_slack: u64,
}

impl LogConfig {
    /// Log length at which an append triggers a retention sweep.
    #[must_use]
    pub const fn sweep_threshold(&self) -> u64 {
        self.max_entries.saturating_add(self.sweep_slack)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_entries: defaults::max_entries(),
            max_entry_bytes: defaults::max_entry_bytes(),
            max_age_secs: None,
            sweep_slack: defaults::sweep_slack(),
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        let fail = |msg: String| Err(ConfigSchemaError::ValidationError(msg));

        if self.max_entries > LOG_ENTRIES_CEILING {
            return fail(format!(
                "log.max_entries {} exceeds max {LOG_ENTRIES_CEILING}",
                self.max_entries
            ));
        }
        if self.sweep_slack > LOG_ENTRIES_CEILING {
            return fail(format!(
                "log.sweep_slack {} exceeds max {LOG_ENTRIES_CEILING}",
                self.sweep_slack
            ));
        }
        if self.max_entry_bytes == 0 || self.max_entry_bytes > LOG_ENTRY_BYTES_CEILING {
            return fail(format!(
                "log.max_entry_bytes must be in 1..={LOG_ENTRY_BYTES_CEILING}, got {}",
                self.max_entry_bytes
            ));
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_above_ceiling_are_rejected() {
        let too_many = LogConfig {
            max_entries: LOG_ENTRIES_CEILING + 1,
            ..LogConfig::default()
        };
        let too_slack = LogConfig {
            sweep_slack: LOG_ENTRIES_CEILING + 1,
            ..LogConfig::default()
        };
        let zero_bytes = LogConfig {
            max_entry_bytes: 0,
            ..LogConfig::default()
        };

        assert!(too_many.validate().is_err());
        assert!(too_slack.validate().is_err());
        assert!(zero_bytes.validate().is_err());
        assert!(LogConfig::default().validate().is_ok());
    }

    #[test]
    fn sweep_threshold_saturates() {
        let cfg = LogConfig {
            max_entries: 10,
            sweep_slack: 5,
            ..LogConfig::default()
        };
        assert_eq!(cfg.sweep_threshold(), 15);

        let cfg = LogConfig {
            max_entries: u64::MAX,
            sweep_slack: 1,
            ..LogConfig::default()
        };
        assert_eq!(cfg.sweep_threshold(), u64::MAX);
    }

    #[test]
    fn sweep_slack_defaults_when_omitted() {
        let cfg: LogConfig = toml::from_str("max_entries = 50").expect("parse");

        assert_eq!(cfg.max_entries, 50);
        assert_eq!(cfg.sweep_slack, 100);
    }
}
