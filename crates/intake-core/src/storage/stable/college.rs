use crate::{
    ids::{CampusId, EntityId, EntityKind},
    storage::{
        StorageError,
        stable::{
            document::{DocumentMap, Documents},
            memory::directory::COLLEGES_ID,
            stable_memory,
        },
    },
};
use ic_stable_structures::BTreeMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static COLLEGE_DOCUMENTS: RefCell<DocumentMap> =
        RefCell::new(BTreeMap::init(stable_memory(COLLEGES_ID)));
}

fn documents() -> Documents {
    Documents::new(&COLLEGE_DOCUMENTS, EntityKind::College)
}

///
/// CollegeRecord
///
/// Campuses live inside the college document, in insertion order.
/// `next_campus_id` only ever grows, so a removed campus id is never handed
/// out again within the same college.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct CollegeRecord {
    pub id: EntityId,
    pub name: String,
    pub logo_url: Option<String>,
    pub campuses: Vec<CampusRecord>,
    pub next_campus_id: u64,
    pub created_at: u64,
}

impl CollegeRecord {
    pub fn campus_mut(&mut self, id: CampusId) -> Option<&mut CampusRecord> {
        self.campuses.iter_mut().find(|c| c.id == id)
    }

    /// Reserve the next campus id for this college.
    pub fn allocate_campus_id(&mut self) -> Option<CampusId> {
        let next = self.next_campus_id.checked_add(1)?;
        self.next_campus_id = next;

        Some(CampusId(next))
    }
}

///
/// CampusRecord
///

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct CampusRecord {
    pub id: CampusId,
    pub name: String,
    pub city: String,
    pub logo_url: Option<String>,
    pub address: Option<String>,
}

///
/// CollegeStore
///

pub(crate) struct CollegeStore;

impl CollegeStore {
    pub(crate) fn get(id: EntityId) -> Result<Option<CollegeRecord>, StorageError> {
        documents().get(id)
    }

    pub(crate) fn contains(id: EntityId) -> bool {
        documents().contains(id)
    }

    pub(crate) fn all() -> Vec<CollegeRecord> {
        documents().entries()
    }

    pub(crate) fn insert(record: &CollegeRecord) -> Result<(), StorageError> {
        documents().insert(record.id, record)
    }

    pub(crate) fn modify<R, E>(
        id: EntityId,
        f: impl FnOnce(&mut CollegeRecord) -> Result<Option<R>, E>,
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

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn college() -> CollegeRecord {
        CollegeRecord {
            id: EntityId(1),
            name: "Northfield".to_string(),
            logo_url: None,
            campuses: Vec::new(),
            next_campus_id: 0,
            created_at: 0,
        }
    }

    #[test]
    fn campus_ids_keep_growing_after_removal() {
        let mut c = college();

        let first = c.allocate_campus_id().expect("first");
        let second = c.allocate_campus_id().expect("second");
        c.campuses.clear();
        let third = c.allocate_campus_id().expect("third");

        assert_eq!((first, second, third), (CampusId(1), CampusId(2), CampusId(3)));
    }

    #[test]
    fn campus_id_allocation_stops_at_the_ceiling() {
        let mut c = college();
        c.next_campus_id = u64::MAX;

        assert_eq!(c.allocate_campus_id(), None);
        assert_eq!(c.next_campus_id, u64::MAX);
    }

    #[test]
    fn modify_writes_back_only_on_change() {
        CollegeStore::reset_for_tests();
        CollegeStore::insert(&college()).expect("insert");

        let unchanged: Option<()> = CollegeStore::modify(EntityId(1), |c| {
            c.name = "ignored".to_string();
            Ok::<_, StorageError>(None)
        })
        .expect("modify");
        assert_eq!(unchanged, None);
        assert_eq!(
            CollegeStore::get(EntityId(1)).expect("get").expect("exists").name,
            "Northfield"
        );

        let renamed = CollegeStore::modify(EntityId(1), |c| {
            c.name = "Southfield".to_string();
            Ok::<_, StorageError>(Some(()))
        })
        .expect("modify");
        assert_eq!(renamed, Some(()));
        assert_eq!(
            CollegeStore::get(EntityId(1)).expect("get").expect("exists").name,
            "Southfield"
        );
    }
}
