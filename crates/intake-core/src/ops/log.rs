use crate::{
    InternalError, log,
    log::Topic,
    storage::stable::log::{LogEntry, LogFilter, RetentionSummary, StableLog, apply_retention},
};

///
/// LogOps
///
/// Read access and retention for the stable log. Logs are not directory
/// state and never take part in cascades.
///

pub struct LogOps;

impl LogOps {
    /// Return one filtered window of `(index, entry)` and the filtered total.
    #[must_use]
    pub fn page(filter: LogFilter<'_>, offset: u64, limit: u64) -> (Vec<(u64, LogEntry)>, u64) {
        StableLog::entries_page_filtered(filter, offset, limit)
    }

    /// Enforce the configured retention limits.
    pub fn retain() -> Result<RetentionSummary, InternalError> {
        let summary = apply_retention()?;

        let dropped = summary.dropped_total();
        if dropped > 0 {
            log!(
                Topic::Store,
                Info,
                "log retention: dropped={dropped} (age={}, limit={}), before={}, retained={}",
                summary.dropped_by_age,
                summary.dropped_by_limit,
                summary.before,
                summary.retained
            );
        }

        Ok(summary)
    }
}
