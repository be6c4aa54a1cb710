//! College removal cascade.
//!
//! Two steps that commit independently:
//! 1. remove the college document (its campuses go with it);
//! 2. remove every batch whose `college_id` is the removed college's id.
//!
//! Nothing encloses the two. If step 2 fails the college stays deleted, the
//! failure is logged under `Cascade`, and the surviving batches show up as
//! orphans until `reconcile::purge_orphan_batches` runs.

use crate::{
    ids::EntityId,
    ops::directory::{batch::BatchOps, college::CollegeOps},
    workflow::prelude::*,
};

///
/// CascadeOutcome
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CascadeOutcome {
    /// The id could not name any college; nothing was attempted.
    Skipped,

    Completed {
        college: Mutation,
        batches: Vec<EntityId>,
    },

    /// Step 1 ran; step 2 did not finish.
    Failed { college: Mutation, error: String },
}

impl CascadeOutcome {
    #[must_use]
    pub const fn college_removed(&self) -> bool {
        matches!(
            self,
            Self::Completed {
                college: Mutation::Applied,
                ..
            } | Self::Failed {
                college: Mutation::Applied,
                ..
            }
        )
    }
}

///
/// CollegeRemoval
///

pub struct CollegeRemoval;

impl CollegeRemoval {
    /// Run both steps for `id`.
    ///
    /// Step 2 runs even when no college matched, so repeating a delete
    /// after a failed cascade finishes the job.
    #[must_use]
    pub fn run(id: &str) -> CascadeOutcome {
        let Some(college_id) = EntityId::parse(id) else {
            log!(Topic::Cascade, Debug, "delete ignored: {id:?} is not a college id");
            return CascadeOutcome::Skipped;
        };

        let college = CollegeOps::remove(college_id);

        match BatchOps::remove_for_college(college_id) {
            Ok(batches) => {
                if !batches.is_empty() {
                    log!(
                        Topic::Cascade,
                        Info,
                        "college {college_id}: removed {} dependent batches",
                        batches.len()
                    );
                }

                CascadeOutcome::Completed { college, batches }
            }
            Err(err) => {
                log!(
                    Topic::Cascade,
                    Error,
                    "college {college_id}: batch cascade failed, orphans remain: {err}"
                );

                CascadeOutcome::Failed {
                    college,
                    error: err.to_string(),
                }
            }
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::directory::{BatchInput, CollegeInput},
        storage::stable::batch::BatchStore,
        test::reset_state,
    };

    fn college(name: &str) -> EntityId {
        CollegeOps::create(&CollegeInput {
            name: Some(name.to_string()),
            logo_url: None,
        })
        .expect("create college")
        .id
    }

    fn batch(name: &str, college_id: &str) -> EntityId {
        BatchOps::create(&BatchInput {
            name: Some(name.to_string()),
            college_id: Some(college_id.to_string()),
        })
        .expect("create batch")
        .id
    }

    #[test]
    fn removes_college_and_only_its_batches() {
        reset_state();
        let c1 = college("Acme");
        let c2 = college("Beta");
        let b1 = batch("2024", &c1.to_string());
        let b2 = batch("2025", &c1.to_string());
        let b3 = batch("2024", &c2.to_string());

        let outcome = CollegeRemoval::run(&c1.to_string());

        assert_eq!(
            outcome,
            CascadeOutcome::Completed {
                college: Mutation::Applied,
                batches: vec![b1, b2],
            }
        );
        let left: Vec<_> = BatchOps::list().into_iter().map(|b| b.id).collect();
        assert_eq!(left, vec![b3]);
        assert!(CollegeOps::list().iter().all(|c| c.id != c1));
    }

    #[test]
    fn unknown_and_malformed_ids_are_no_ops() {
        reset_state();
        let c1 = college("Acme");
        batch("2024", &c1.to_string());

        assert_eq!(
            CollegeRemoval::run("999"),
            CascadeOutcome::Completed {
                college: Mutation::NoMatch,
                batches: Vec::new(),
            }
        );
        assert_eq!(CollegeRemoval::run("acme"), CascadeOutcome::Skipped);
        assert_eq!(BatchOps::list().len(), 1);
    }

    #[test]
    fn repeated_delete_finishes_interrupted_cascade() {
        reset_state();
        let c1 = college("Acme");
        let b1 = batch("2024", &c1.to_string());
        let corrupt = EntityId(9_999);
        BatchStore::insert_raw_for_tests(corrupt, vec![0xff]);

        let first = CollegeRemoval::run(&c1.to_string());
        assert!(first.college_removed());
        assert!(matches!(first, CascadeOutcome::Failed { .. }));

        BatchStore::remove(corrupt);
        let second = CollegeRemoval::run(&c1.to_string());

        assert_eq!(
            second,
            CascadeOutcome::Completed {
                college: Mutation::NoMatch,
                batches: vec![b1],
            }
        );
    }
}
