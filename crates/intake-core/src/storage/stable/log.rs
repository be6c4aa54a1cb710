#![allow(clippy::cast_possible_truncation)]
use crate::{
    config::{Config, schema::LogConfig},
    log::Level,
    storage::{
        StorageError,
        stable::{
            StableMemory,
            memory::observability::{LOG_DATA_ID, LOG_INDEX_ID},
            stable_memory,
        },
    },
    utils::{codec, time},
};
use ic_stable_structures::log::{Log as StableLogImpl, WriteError};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

//
// Stable Log Storage (ic-stable-structures)
//
// Entries are stored as CBOR bytes; an entry that no longer decodes is
// skipped on read rather than failing the whole page.
//

type StableLogStorage = StableLogImpl<Vec<u8>, StableMemory, StableMemory>;

fn create_log() -> StableLogStorage {
    StableLogImpl::new(stable_memory(LOG_INDEX_ID), stable_memory(LOG_DATA_ID))
}

thread_local! {
    static LOG: RefCell<StableLogStorage> = RefCell::new(create_log());
}

fn with_log<R>(f: impl FnOnce(&StableLogStorage) -> R) -> R {
    LOG.with_borrow(|l| f(l))
}

fn with_log_mut<R>(f: impl FnOnce(&mut StableLogStorage) -> R) -> R {
    LOG.with_borrow_mut(|l| f(l))
}

pub(crate) fn log_config() -> LogConfig {
    Config::try_get().map(|c| c.log.clone()).unwrap_or_default()
}

impl From<WriteError> for StorageError {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::GrowFailed {
                current_size,
                delta,
            } => Self::LogWriteFailed {
                current_size,
                delta,
            },
        }
    }
}

///
/// LogEntry
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LogEntry {
    pub crate_name: String,
    pub created_at: u64,
    pub level: Level,
    pub topic: Option<String>,
    pub message: String,
}

impl LogEntry {
    pub fn new(crate_name: &str, level: Level, topic: Option<&str>, msg: &str) -> Self {
        Self {
            crate_name: crate_name.to_string(),
            created_at: time::now_secs(),
            level,
            topic: topic.map(ToString::to_string),
            message: msg.to_string(),
        }
    }
}

///
/// LogFilter
///

#[derive(Clone, Copy, Debug, Default)]
pub struct LogFilter<'a> {
    pub crate_name: Option<&'a str>,
    pub topic: Option<&'a str>,
    pub min_level: Option<Level>,
}

impl LogFilter<'_> {
    fn matches(&self, e: &LogEntry) -> bool {
        self.crate_name.is_none_or(|name| e.crate_name == name)
            && self
                .topic
                .is_none_or(|t| e.topic.as_deref() == Some(normalize_topic(t).as_str()))
            && self.min_level.is_none_or(|lvl| e.level >= lvl)
    }
}

///
/// RetentionSummary
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RetentionSummary {
    pub before: u64,
    pub retained: u64,
    pub dropped_by_age: u64,
    pub dropped_by_limit: u64,
}

impl RetentionSummary {
    #[must_use]
    pub const fn dropped_total(&self) -> u64 {
        self.dropped_by_age + self.dropped_by_limit
    }
}

///
/// StableLog
///

pub(crate) struct StableLog;

impl StableLog {
    // -------- Append --------

    pub fn append(
        crate_name: &str,
        topic: Option<&str>,
        level: Level,
        message: &str,
    ) -> Result<u64, StorageError> {
        let cfg = log_config();

        if cfg.max_entries == 0 {
            return Ok(0);
        }

        let topic = topic.map(normalize_topic);
        let message = truncate_to_bytes(message, cfg.max_entry_bytes as usize);
        let entry = LogEntry::new(crate_name, level, topic.as_deref(), message);
        let index = Self::append_entry(&entry)?;

        if Self::len() > cfg.sweep_threshold() {
            apply_retention()?;
        }

        Ok(index)
    }

    fn append_entry(entry: &LogEntry) -> Result<u64, StorageError> {
        let bytes = codec::encode(entry).map_err(StorageError::LogEncode)?;

        with_log(|log| log.append(&bytes)).map_err(StorageError::from)
    }

    // -------- Read -----------

    /// Return one filtered window of `(index, entry)` plus the filtered total.
    #[must_use]
    pub fn entries_page_filtered(
        filter: LogFilter<'_>,
        offset: u64,
        limit: u64,
    ) -> (Vec<(u64, LogEntry)>, u64) {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        with_log(|log| {
            let items: Vec<(u64, LogEntry)> = log
                .iter()
                .enumerate()
                .filter_map(|(i, bytes)| {
                    codec::decode::<LogEntry>(&bytes)
                        .ok()
                        .map(|entry| (i as u64, entry))
                })
                .filter(|(_, e)| filter.matches(e))
                .collect();

            let total = items.len() as u64;
            let entries = items.into_iter().skip(offset).take(limit).collect();

            (entries, total)
        })
    }

    #[must_use]
    pub fn len() -> u64 {
        with_log(StableLogStorage::len)
    }

    #[cfg(test)]
    pub fn reset_for_tests() {
        with_log_mut(|log| *log = create_log());
    }
}

/// Enforce the configured age and count limits, rewriting the log when
/// anything was dropped.
pub(crate) fn apply_retention() -> Result<RetentionSummary, StorageError> {
    let cfg = log_config();
    let before = StableLog::len();

    if cfg.max_entries == 0 {
        with_log_mut(|log| *log = create_log());
        return Ok(RetentionSummary {
            before,
            retained: 0,
            dropped_by_age: 0,
            dropped_by_limit: before,
        });
    }

    let now = time::now_secs();
    let max_entries = cfg.max_entries as usize;

    let mut retained: Vec<LogEntry> = with_log(|log| {
        log.iter()
            .filter_map(|bytes| codec::decode(&bytes).ok())
            .collect()
    });
    let decoded = retained.len() as u64;

    if let Some(age) = cfg.max_age_secs {
        retained.retain(|e| now.saturating_sub(e.created_at) <= age);
    }
    let dropped_by_age = decoded - retained.len() as u64;

    let mut dropped_by_limit = 0;
    if retained.len() > max_entries {
        let drop = retained.len() - max_entries;
        retained.drain(0..drop);
        dropped_by_limit = drop as u64;
    }

    let summary = RetentionSummary {
        before,
        retained: retained.len() as u64,
        dropped_by_age,
        dropped_by_limit,
    };

    if summary.retained == before {
        return Ok(summary);
    }

    with_log_mut(|log| *log = create_log());
    for entry in &retained {
        StableLog::append_entry(entry)?;
    }

    Ok(summary)
}

fn normalize_topic(topic: &str) -> String {
    topic.trim().to_ascii_lowercase()
}

fn truncate_to_bytes(message: &str, max_bytes: usize) -> &str {
    if message.len() <= max_bytes {
        return message;
    }

    let mut end = max_bytes;
    while !message.is_char_boundary(end) {
        end -= 1;
    }

    &message[..end]
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ConfigTestBuilder;

    fn page(filter: LogFilter<'_>) -> Vec<LogEntry> {
        StableLog::entries_page_filtered(filter, 0, u64::MAX)
            .0
            .into_iter()
            .map(|(_, e)| e)
            .collect()
    }

    #[test]
    fn append_normalizes_topic_and_filters_by_level() {
        StableLog::reset_for_tests();

        StableLog::append("intake-core", Some("College"), Level::Info, "created")
            .expect("append info");
        StableLog::append("intake-core", Some("Cascade"), Level::Error, "failed")
            .expect("append error");

        let colleges = page(LogFilter {
            topic: Some("college"),
            ..LogFilter::default()
        });
        assert_eq!(colleges.len(), 1);
        assert_eq!(colleges[0].topic.as_deref(), Some("college"));

        let errors = page(LogFilter {
            min_level: Some(Level::Warn),
            ..LogFilter::default()
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "failed");
    }

    #[test]
    fn paging_reports_filtered_total() {
        StableLog::reset_for_tests();

        for i in 0..5 {
            StableLog::append("intake-core", None, Level::Debug, &format!("m{i}"))
                .expect("append");
        }

        let (entries, total) = StableLog::entries_page_filtered(LogFilter::default(), 1, 2);

        assert_eq!(total, 5);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, 1);
        assert_eq!(entries[1].1.message, "m2");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_to_bytes("abc", 8), "abc");
        assert_eq!(truncate_to_bytes("abcdef", 3), "abc");
        // 'é' is two bytes; cutting at 2 would split it
        assert_eq!(truncate_to_bytes("aé", 2), "a");
    }

    #[test]
    fn append_sweeps_back_to_cap_once_slack_is_spent() {
        ConfigTestBuilder::new()
            .max_log_entries(10)
            .log_sweep_slack(5)
            .install();
        StableLog::reset_for_tests();

        for i in 0..50 {
            StableLog::append("intake-core", None, Level::Warn, &format!("m{i}"))
                .expect("append");
            assert!(StableLog::len() <= 15, "len {} after {i}", StableLog::len());
        }

        let newest = page(LogFilter::default());
        assert!(newest.len() >= 10);
        assert_eq!(newest.last().map(|e| e.message.as_str()), Some("m49"));
    }

    #[test]
    fn zero_slack_holds_the_log_at_cap() {
        ConfigTestBuilder::new()
            .max_log_entries(3)
            .log_sweep_slack(0)
            .install();
        StableLog::reset_for_tests();

        for i in 0..7 {
            StableLog::append("intake-core", None, Level::Info, &format!("m{i}")).expect("append");
        }

        let messages: Vec<_> = page(LogFilter::default())
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages, ["m4", "m5", "m6"]);
    }

    #[test]
    fn retention_is_a_noop_under_limits() {
        StableLog::reset_for_tests();
        StableLog::append("intake-core", None, Level::Info, "keep").expect("append");

        let summary = apply_retention().expect("retention");

        assert_eq!(summary.dropped_total(), 0);
        assert_eq!(StableLog::len(), 1);
    }
}
