use crate::{
    ids::{EntityId, EntityKind},
    storage::{
        StorageError,
        stable::{
            document::{DocumentMap, Documents},
            memory::submission::SUBMISSIONS_ID,
            stable_memory,
        },
    },
};
use ic_stable_structures::BTreeMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static SUBMISSION_DOCUMENTS: RefCell<DocumentMap> =
        RefCell::new(BTreeMap::init(stable_memory(SUBMISSIONS_ID)));
}

fn documents() -> Documents {
    Documents::new(&SUBMISSION_DOCUMENTS, EntityKind::Submission)
}

///
/// SubmissionRecord
///
/// Institution fields hold the display names current at submission time.
/// Later renames or deletions in the directory do not touch them.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub id: EntityId,
    pub student_name: String,
    pub contact: Option<String>,
    pub school: Option<String>,
    pub college: Option<String>,
    pub campus: Option<String>,
    pub batch: Option<String>,
    pub measurements: Vec<MeasurementRecord>,
    pub created_at: u64,
}

///
/// MeasurementRecord
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MeasurementRecord {
    pub label: String,
    pub value: f64,
}

///
/// SubmissionStore
///

pub(crate) struct SubmissionStore;

impl SubmissionStore {
    pub(crate) fn get(id: EntityId) -> Result<Option<SubmissionRecord>, StorageError> {
        documents().get(id)
    }

    pub(crate) fn all() -> Vec<SubmissionRecord> {
        documents().entries()
    }

    pub(crate) fn insert(record: &SubmissionRecord) -> Result<(), StorageError> {
        documents().insert(record.id, record)
    }

    pub(crate) fn remove(id: EntityId) -> bool {
        documents().remove(id)
    }

    #[cfg(test)]
    pub(crate) fn reset_for_tests() {
        documents().clear();
    }
}
