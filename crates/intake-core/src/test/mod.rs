//! Test support: shared fixtures and cross-layer directory properties.
//!
//! Every test runs on its own thread, so each one starts with empty
//! thread-local stores. `reset_state` still clears everything for tests
//! that build several scenarios in sequence.

pub mod config;

mod submission;

pub use config::ConfigTestBuilder;

use crate::{
    access::auth,
    config::Config,
    storage::stable::{
        batch::BatchStore, college::CollegeStore, log::StableLog, school::SchoolStore,
        sequence::SequenceStore, submission::SubmissionStore,
    },
};

/// Token accepted by `ConfigModel::test_default`.
pub const ADMIN_TOKEN: &str = "intake-test-admin-token";

/// Convenience for api calls made as the admin.
pub const ADMIN: Option<&str> = Some(ADMIN_TOKEN);

/// Clear every store, the log, the auth gate, and the config.
pub fn reset_state() {
    Config::reset_for_tests();
    auth::reset_gate();

    SequenceStore::reset_for_tests();
    SchoolStore::reset_for_tests();
    CollegeStore::reset_for_tests();
    BatchStore::reset_for_tests();
    SubmissionStore::reset_for_tests();
    StableLog::reset_for_tests();
}
