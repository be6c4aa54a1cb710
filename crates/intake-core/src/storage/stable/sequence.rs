//! Monotonic id sequences, one per top-level document kind.

use crate::{
    ids::{EntityId, EntityKind},
    storage::{
        StorageError,
        stable::{StableMemory, memory::directory::SEQUENCES_ID, stable_memory},
    },
};
use ic_stable_structures::BTreeMap;
use std::cell::RefCell;

thread_local! {
    static SEQUENCES: RefCell<BTreeMap<u8, u64, StableMemory>> =
        RefCell::new(BTreeMap::init(stable_memory(SEQUENCES_ID)));
}

///
/// SequenceStore
///
/// Stores the last id handed out per kind. Ids start at 1 and are never
/// reissued, even after the document they named is deleted.
///

pub(crate) struct SequenceStore;

impl SequenceStore {
    pub(crate) fn next(kind: EntityKind) -> Result<EntityId, StorageError> {
        let key = kind.sequence_key();

        SEQUENCES.with_borrow_mut(|map| {
            let last = map.get(&key).unwrap_or(0);
            let next = last
                .checked_add(1)
                .ok_or(StorageError::IdSpaceExhausted(kind))?;
            map.insert(key, next);

            Ok(EntityId(next))
        })
    }

    #[cfg(test)]
    pub(crate) fn set_for_tests(kind: EntityKind, last: u64) {
        SEQUENCES.with_borrow_mut(|map| map.insert(kind.sequence_key(), last));
    }

    #[cfg(test)]
    pub(crate) fn reset_for_tests() {
        SEQUENCES.with_borrow_mut(BTreeMap::clear_new);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_are_independent_per_kind() {
        SequenceStore::reset_for_tests();

        assert_eq!(SequenceStore::next(EntityKind::School).unwrap(), EntityId(1));
        assert_eq!(SequenceStore::next(EntityKind::School).unwrap(), EntityId(2));
        assert_eq!(SequenceStore::next(EntityKind::College).unwrap(), EntityId(1));
        assert_eq!(SequenceStore::next(EntityKind::Batch).unwrap(), EntityId(1));
    }

    #[test]
    fn exhausted_sequence_is_reported() {
        SequenceStore::reset_for_tests();
        SequenceStore::set_for_tests(EntityKind::Batch, u64::MAX);

        for _ in 0..2 {
            let err = SequenceStore::next(EntityKind::Batch).unwrap_err();
            assert!(matches!(err, StorageError::IdSpaceExhausted(EntityKind::Batch)));
        }
        assert_eq!(SequenceStore::next(EntityKind::School).unwrap(), EntityId(1));
    }
}
