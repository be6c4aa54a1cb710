//! Student submissions.
//!
//! A submission copies institution names as they read at submit time. No
//! directory change (rename, campus edit, cascade) reaches back into stored
//! submissions.

use crate::{
    dto::submission::{Measurement, SubmissionInput, SubmissionView},
    ops::submission::SubmissionOps,
    storage::stable::submission::SubmissionRecord,
    workflow::prelude::*,
};

///
/// SubmissionMapper
///

pub struct SubmissionMapper;

impl SubmissionMapper {
    #[must_use]
    pub fn record_to_view(record: SubmissionRecord) -> SubmissionView {
        SubmissionView {
            id: record.id.to_string(),
            student_name: record.student_name,
            contact: record.contact,
            school: record.school,
            college: record.college,
            campus: record.campus,
            batch: record.batch,
            measurements: record
                .measurements
                .into_iter()
                .map(|m| Measurement {
                    label: m.label,
                    value: m.value,
                })
                .collect(),
            created_at: record.created_at,
        }
    }
}

pub(crate) fn submit(input: SubmissionInput) -> Result<SubmissionView, InternalError> {
    SubmissionOps::create(input).map(SubmissionMapper::record_to_view)
}

pub(crate) fn get(id: &str) -> Result<SubmissionView, InternalError> {
    SubmissionOps::get(id).map(SubmissionMapper::record_to_view)
}

pub(crate) fn list() -> Vec<SubmissionView> {
    SubmissionOps::list()
        .into_iter()
        .map(SubmissionMapper::record_to_view)
        .collect()
}

pub(crate) fn remove(id: &str) -> Mutation {
    SubmissionOps::remove(id)
}
