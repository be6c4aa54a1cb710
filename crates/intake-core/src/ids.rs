//!
//! Opaque identifiers for directory documents.
//!
//! Top-level documents are keyed by a fixed-width `EntityId` allocated from a
//! per-kind sequence; campus entries are keyed by a `CampusId` allocated from
//! a sequence held inside the owning college document. Both render as plain
//! decimal strings at the public surface and are never reused.
//!
//! Only the exact rendered form addresses a document: `"7"` does, while
//! `"07"`, `" 7"` and `"+7"` address nothing.
//!

use derive_more::Display;
use ic_stable_structures::{Storable, storable::Bound};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, str::FromStr};
use thiserror::Error as ThisError;

///
/// EntityKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum EntityKind {
    #[display("batch")]
    Batch,
    #[display("campus")]
    Campus,
    #[display("college")]
    College,
    #[display("school")]
    School,
    #[display("submission")]
    Submission,
}

impl EntityKind {
    /// Key of the id sequence backing this kind.
    #[must_use]
    pub const fn sequence_key(self) -> u8 {
        match self {
            Self::Batch => 1,
            Self::Campus => 2,
            Self::College => 3,
            Self::School => 4,
            Self::Submission => 5,
        }
    }
}

///
/// EntityId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Parse a caller-supplied id. Anything that is not a canonical id
    /// resolves to `None`, which callers treat as "no such document".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_canonical(s).map(Self)
    }
}

impl Storable for EntityId {
    const BOUND: Bound = Bound::Bounded {
        max_size: 8,
        is_fixed_size: true,
    };

    fn to_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.0.to_be_bytes().to_vec())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.0.to_be_bytes().to_vec()
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        let b = bytes.as_ref();

        if b.len() != 8 {
            return Self::default();
        }

        let mut arr = [0u8; 8];
        arr.copy_from_slice(b);

        Self(u64::from_be_bytes(arr))
    }
}

///
/// CampusId
///
/// Unique only within the owning college.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct CampusId(pub u64);

impl CampusId {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        parse_canonical(s).ok().map(Self)
    }
}

///
/// IdParseError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("'{0}' is not a canonical id")]
pub struct IdParseError(String);

// Decimal u64 whose rendering is exactly `s`.
fn parse_canonical(s: &str) -> Result<u64, IdParseError> {
    s.parse::<u64>()
        .ok()
        .filter(|n| n.to_string() == s)
        .ok_or_else(|| IdParseError(s.to_string()))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_round_trips_through_storable_bytes() {
        let id = EntityId(0x0102_0304_0506_0708);
        let bytes = id.to_bytes();

        assert_eq!(bytes.as_ref(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(EntityId::from_bytes(bytes), id);
    }

    #[test]
    fn storable_keys_sort_in_allocation_order() {
        let low = EntityId(2).into_bytes();
        let high = EntityId(256).into_bytes();

        assert!(low < high);
    }

    #[test]
    fn non_canonical_ids_do_not_parse() {
        for raw in [
            "", "abc", "-1", "1.5", "18446744073709551616", " 42", "42 ", "042", "+42", "00",
        ] {
            assert_eq!(EntityId::parse(raw), None, "raw {raw:?}");
            assert_eq!(CampusId::parse(raw), None, "raw {raw:?}");
        }

        assert_eq!(EntityId::parse("42"), Some(EntityId(42)));
        assert_eq!(EntityId::parse("0"), Some(EntityId(0)));
        assert_eq!(CampusId::parse("7"), Some(CampusId(7)));
        assert!("042".parse::<EntityId>().is_err());
    }

    #[test]
    fn sequence_keys_are_distinct() {
        let keys = [
            EntityKind::Batch,
            EntityKind::Campus,
            EntityKind::College,
            EntityKind::School,
            EntityKind::Submission,
        ]
        .map(EntityKind::sequence_key);

        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
