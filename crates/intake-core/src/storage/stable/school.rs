use crate::{
    ids::{EntityId, EntityKind},
    storage::{
        StorageError,
        stable::{
            document::{DocumentMap, Documents},
            memory::directory::SCHOOLS_ID,
            stable_memory,
        },
    },
};
use ic_stable_structures::BTreeMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static SCHOOL_DOCUMENTS: RefCell<DocumentMap> =
        RefCell::new(BTreeMap::init(stable_memory(SCHOOLS_ID)));
}

fn documents() -> Documents {
    Documents::new(&SCHOOL_DOCUMENTS, EntityKind::School)
}

///
/// SchoolRecord
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SchoolRecord {
    pub id: EntityId,
    pub name: String,
    pub created_at: u64,
}

///
/// SchoolStore
///

pub(crate) struct SchoolStore;

impl SchoolStore {
    pub(crate) fn get(id: EntityId) -> Result<Option<SchoolRecord>, StorageError> {
        documents().get(id)
    }

    pub(crate) fn all() -> Vec<SchoolRecord> {
        documents().entries()
    }

    pub(crate) fn insert(record: &SchoolRecord) -> Result<(), StorageError> {
        documents().insert(record.id, record)
    }

    pub(crate) fn modify<R, E>(
        id: EntityId,
        f: impl FnOnce(&mut SchoolRecord) -> Result<Option<R>, E>,
    ) -> Result<Option<R>, E>
    where
        E: From<StorageError>,
    {
        documents().modify(id, f)
    }

    pub(crate) fn remove(id: EntityId) -> bool {
        documents().remove(id)
    }

    #[cfg(test)]
    pub(crate) fn reset_for_tests() {
        documents().clear();
    }
}
