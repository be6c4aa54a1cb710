use crate::{
    dto::{
        log::{LogEntryView, LogQuery, RetentionReport},
        page::Page,
    },
    ops::log::LogOps,
    storage::stable::log::{LogEntry, LogFilter, RetentionSummary},
    workflow::prelude::*,
};

///
/// LogMapper
///

pub struct LogMapper;

impl LogMapper {
    #[must_use]
    pub fn entry_to_view(index: u64, entry: LogEntry) -> LogEntryView {
        LogEntryView {
            index,
            created_at: entry.created_at,
            crate_name: entry.crate_name,
            level: entry.level,
            topic: entry.topic,
            message: entry.message,
        }
    }
}

// log_page
pub(crate) fn log_page(query: &LogQuery) -> Page<LogEntryView> {
    let request = query.page.clamped();
    let filter = LogFilter {
        crate_name: query.crate_name.as_deref(),
        topic: query.topic.as_deref(),
        min_level: query.min_level,
    };

    let (entries, total) = LogOps::page(filter, request.offset, request.limit);

    Page {
        entries: entries
            .into_iter()
            .map(|(index, entry)| LogMapper::entry_to_view(index, entry))
            .collect(),
        total,
    }
}

pub(crate) fn retain() -> Result<RetentionReport, InternalError> {
    let RetentionSummary {
        before,
        retained,
        dropped_by_age,
        dropped_by_limit,
    } = LogOps::retain()?;

    Ok(RetentionReport {
        before,
        retained,
        dropped_by_age,
        dropped_by_limit,
    })
}
