use crate::config::{Config, ConfigModel};
use std::sync::Arc;

///
/// ConfigTestBuilder
///

#[derive(Default)]
pub struct ConfigTestBuilder {
    model: ConfigModel,
}

impl ConfigTestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: ConfigModel::test_default(),
        }
    }

    #[must_use]
    pub fn with_token_digest(mut self, digest: impl Into<String>) -> Self {
        self.model.auth.token_sha256.push(digest.into());
        self
    }

    #[must_use]
    pub fn max_name_bytes(mut self, max: usize) -> Self {
        self.model.directory.max_name_bytes = max;
        self
    }

    #[must_use]
    pub fn max_campuses_per_college(mut self, max: u32) -> Self {
        self.model.directory.max_campuses_per_college = max;
        self
    }

    #[must_use]
    pub fn max_measurements(mut self, max: u32) -> Self {
        self.model.submission.max_measurements = max;
        self
    }

    #[must_use]
    pub fn max_log_entries(mut self, max: u64) -> Self {
        self.model.log.max_entries = max;
        self
    }

    #[must_use]
    pub fn log_sweep_slack(mut self, slack: u64) -> Self {
        self.model.log.sweep_slack = slack;
        self
    }

    #[must_use]
    pub fn build(self) -> ConfigModel {
        self.model
    }

    /// Replace the active config with this one.
    pub fn install(self) -> Arc<ConfigModel> {
        Config::reset_for_tests();
        Config::init_from_model_for_tests(self.model).expect("init test config")
    }
}
