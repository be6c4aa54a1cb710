use crate::{
    dto::{page::PageRequest, prelude::*},
    log::Level,
};

///
/// LogEntryView
///

#[derive(CandidType, Clone, Debug, Deserialize, Serialize)]
pub struct LogEntryView {
    pub index: u64,
    pub created_at: u64,
    pub crate_name: String,
    pub level: Level,
    pub topic: Option<String>,
    pub message: String,
}

///
/// LogQuery
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Serialize)]
pub struct LogQuery {
    pub crate_name: Option<String>,
    pub topic: Option<String>,
    pub min_level: Option<Level>,
    pub page: PageRequest,
}

///
/// RetentionReport
///

#[derive(CandidType, Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RetentionReport {
    pub before: u64,
    pub retained: u64,
    pub dropped_by_age: u64,
    pub dropped_by_limit: u64,
}
