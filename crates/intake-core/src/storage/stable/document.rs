//! Document collections over stable-memory B-trees.
//!
//! Each collection maps an `EntityId` to the CBOR bytes of one record. A
//! single call here runs inside one borrow of the owning map, which is what
//! makes every per-document update atomic.

use crate::{
    ids::{EntityId, EntityKind},
    log,
    log::Topic,
    storage::{StorageError, stable::StableMemory},
    utils::codec,
};
use ic_stable_structures::BTreeMap;
use serde::{Serialize, de::DeserializeOwned};
use std::{cell::RefCell, thread::LocalKey};

///
/// DocumentMap
///

pub type DocumentMap = BTreeMap<EntityId, Vec<u8>, StableMemory>;

///
/// Documents
///
/// Handle over one thread-local document map.
///

#[derive(Clone, Copy)]
pub(crate) struct Documents {
    slot: &'static LocalKey<RefCell<DocumentMap>>,
    kind: EntityKind,
}

impl Documents {
    pub(crate) const fn new(slot: &'static LocalKey<RefCell<DocumentMap>>, kind: EntityKind) -> Self {
        Self { slot, kind }
    }

    fn decode<T: DeserializeOwned>(self, id: EntityId, bytes: &[u8]) -> Result<T, StorageError> {
        codec::decode(bytes).map_err(|source| StorageError::Decode {
            kind: self.kind,
            id,
            source,
        })
    }

    fn encode<T: Serialize>(self, id: EntityId, record: &T) -> Result<Vec<u8>, StorageError> {
        codec::encode(record).map_err(|source| StorageError::Encode {
            kind: self.kind,
            id,
            source,
        })
    }

    // -------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------

    pub(crate) fn get<T: DeserializeOwned>(self, id: EntityId) -> Result<Option<T>, StorageError> {
        self.slot
            .with_borrow(|map| map.get(&id))
            .map(|bytes| self.decode(id, &bytes))
            .transpose()
    }

    pub(crate) fn contains(self, id: EntityId) -> bool {
        self.slot.with_borrow(|map| map.contains_key(&id))
    }

    /// Decode every readable document in key order.
    ///
    /// A document that fails to decode is left in place, skipped, and
    /// reported under `Store`. Bulk removals (`remove_where`) still refuse to
    /// run past one.
    pub(crate) fn entries<T: DeserializeOwned>(self) -> Vec<T> {
        let (records, skipped) = self.slot.with_borrow(|map| {
            let mut records = Vec::new();
            let mut skipped = Vec::new();

            for entry in map.iter() {
                match self.decode(*entry.key(), &entry.value()) {
                    Ok(record) => records.push(record),
                    Err(err) => skipped.push(err),
                }
            }

            (records, skipped)
        });

        for err in skipped {
            log!(Topic::Store, Warn, "read skipped: {err}");
        }

        records
    }

    // -------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------

    pub(crate) fn insert<T: Serialize>(self, id: EntityId, record: &T) -> Result<(), StorageError> {
        let bytes = self.encode(id, record)?;
        self.slot.with_borrow_mut(|map| map.insert(id, bytes));

        Ok(())
    }

    /// Remove one document; returns whether it existed.
    pub(crate) fn remove(self, id: EntityId) -> bool {
        self.slot.with_borrow_mut(|map| map.remove(&id)).is_some()
    }

    /// Read-modify-write one document inside a single borrow.
    ///
    /// Returns `Ok(None)` when the document is absent or when `f` reports no
    /// change (`Ok(None)`), in which case nothing is written.
    pub(crate) fn modify<T, R, E>(
        self,
        id: EntityId,
        f: impl FnOnce(&mut T) -> Result<Option<R>, E>,
    ) -> Result<Option<R>, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<StorageError>,
    {
        self.slot.with_borrow_mut(|map| {
            let Some(bytes) = map.get(&id) else {
                return Ok(None);
            };

            let mut record: T = self.decode(id, &bytes)?;
            let Some(out) = f(&mut record)? else {
                return Ok(None);
            };

            let bytes = self.encode(id, &record)?;
            map.insert(id, bytes);

            Ok(Some(out))
        })
    }

    /// Remove every document matching `pred`.
    ///
    /// All documents are decoded before anything is removed, so a decode
    /// failure leaves the collection untouched.
    pub(crate) fn remove_where<T: DeserializeOwned>(
        self,
        pred: impl Fn(&T) -> bool,
    ) -> Result<Vec<EntityId>, StorageError> {
        self.slot.with_borrow_mut(|map| {
            let mut matched = Vec::new();
            for entry in map.iter() {
                let id = *entry.key();
                let record: T = self.decode(id, &entry.value())?;
                if pred(&record) {
                    matched.push(id);
                }
            }

            for id in &matched {
                map.remove(id);
            }

            Ok(matched)
        })
    }

    pub(crate) fn clear(self) {
        self.slot.with_borrow_mut(DocumentMap::clear_new);
    }

    /// Test-only: plant raw bytes, bypassing the codec.
    #[cfg(test)]
    pub(crate) fn insert_raw(self, id: EntityId, bytes: Vec<u8>) {
        self.slot.with_borrow_mut(|map| map.insert(id, bytes));
    }
}
