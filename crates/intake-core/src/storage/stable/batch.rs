use crate::{
    ids::{EntityId, EntityKind},
    storage::{
        StorageError,
        stable::{
            document::{DocumentMap, Documents},
            memory::directory::BATCHES_ID,
            stable_memory,
        },
    },
};
use ic_stable_structures::BTreeMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static BATCH_DOCUMENTS: RefCell<DocumentMap> =
        RefCell::new(BTreeMap::init(stable_memory(BATCHES_ID)));
}

fn documents() -> Documents {
    Documents::new(&BATCH_DOCUMENTS, EntityKind::Batch)
}

///
/// BatchRecord
///
/// `college_id` is a plain copy of whatever the caller supplied. It is not
/// checked against the college collection and may name nothing.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BatchRecord {
    pub id: EntityId,
    pub name: String,
    pub college_id: String,
    pub created_at: u64,
}

///
/// BatchStore
///

pub(crate) struct BatchStore;

impl BatchStore {
    pub(crate) fn get(id: EntityId) -> Result<Option<BatchRecord>, StorageError> {
        documents().get(id)
    }

    pub(crate) fn all() -> Vec<BatchRecord> {
        documents().entries()
    }

    pub(crate) fn insert(record: &BatchRecord) -> Result<(), StorageError> {
        documents().insert(record.id, record)
    }

    pub(crate) fn modify<R, E>(
        id: EntityId,
        f: impl FnOnce(&mut BatchRecord) -> Result<Option<R>, E>,
    ) -> Result<Option<R>, E>
    where
        E: From<StorageError>,
    {
        documents().modify(id, f)
    }

    pub(crate) fn remove(id: EntityId) -> bool {
        documents().remove(id)
    }

    /// Remove every batch whose `college_id` satisfies `pred`.
    pub(crate) fn remove_where(
        pred: impl Fn(&str) -> bool,
    ) -> Result<Vec<EntityId>, StorageError> {
        documents().remove_where(|b: &BatchRecord| pred(&b.college_id))
    }

    #[cfg(test)]
    pub(crate) fn insert_raw_for_tests(id: EntityId, bytes: Vec<u8>) {
        documents().insert_raw(id, bytes);
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

    fn batch(id: u64, college_id: &str) -> BatchRecord {
        BatchRecord {
            id: EntityId(id),
            name: format!("batch-{id}"),
            college_id: college_id.to_string(),
            created_at: id,
        }
    }

    #[test]
    fn remove_where_matches_on_college_id() {
        BatchStore::reset_for_tests();
        for b in [batch(1, "7"), batch(2, "8"), batch(3, "7")] {
            BatchStore::insert(&b).expect("insert");
        }

        let removed = BatchStore::remove_where(|c| c == "7").expect("remove");

        assert_eq!(removed, vec![EntityId(1), EntityId(3)]);
        let left: Vec<_> = BatchStore::all().into_iter().map(|b| b.id).collect();
        assert_eq!(left, vec![EntityId(2)]);
    }

    #[test]
    fn undecodable_batch_leaves_collection_untouched() {
        BatchStore::reset_for_tests();
        BatchStore::insert(&batch(1, "7")).expect("insert");
        BatchStore::insert_raw_for_tests(EntityId(2), vec![0xff, 0x00]);

        let err = BatchStore::remove_where(|c| c == "7").unwrap_err();

        assert!(matches!(err, StorageError::Decode { kind: EntityKind::Batch, .. }));
        assert!(BatchStore::get(EntityId(1)).expect("get").is_some());
    }

    #[test]
    fn all_skips_undecodable_batches() {
        BatchStore::reset_for_tests();
        BatchStore::insert(&batch(1, "7")).expect("insert");
        BatchStore::insert_raw_for_tests(EntityId(2), vec![0xff, 0x00]);
        BatchStore::insert(&batch(3, "8")).expect("insert");

        let ids: Vec<_> = BatchStore::all().into_iter().map(|b| b.id).collect();

        assert_eq!(ids, vec![EntityId(1), EntityId(3)]);
        assert!(BatchStore::get(EntityId(2)).is_err());
    }
}
