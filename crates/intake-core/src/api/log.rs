use crate::{
    api::authorize,
    dto::{
        error::Error,
        log::{LogEntryView, LogQuery, RetentionReport},
        page::Page,
    },
    workflow,
};

///
/// LogApi
///

pub struct LogApi;

impl LogApi {
    pub fn page(token: Option<&str>, query: &LogQuery) -> Result<Page<LogEntryView>, Error> {
        authorize(token)?;

        Ok(workflow::log::log_page(query))
    }

    /// Run a retention sweep with the configured limits.
    pub fn retain(token: Option<&str>) -> Result<RetentionReport, Error> {
        authorize(token)?;

        workflow::log::retain().map_err(Error::from)
    }
}
