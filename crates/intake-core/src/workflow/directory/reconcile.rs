//! Orphan batch reconciliation.
//!
//! An orphan is a batch whose `college_id` names no stored college, either
//! because it was created that way or because a college cascade did not
//! finish.

use crate::{
    dto::directory::{BatchView, OrphanBatchReport},
    ops::directory::batch::BatchOps,
    workflow::{directory::mapper::BatchMapper, prelude::*},
};

pub(crate) fn list_orphan_batches() -> Vec<BatchView> {
    BatchOps::list_orphans()
        .into_iter()
        .map(BatchMapper::record_to_view)
        .collect()
}

pub(crate) fn purge_orphan_batches() -> Result<OrphanBatchReport, InternalError> {
    let removed: Vec<String> = BatchOps::remove_orphans()?
        .iter()
        .map(ToString::to_string)
        .collect();

    if !removed.is_empty() {
        log!(
            Topic::Cascade,
            Warn,
            "purged {} orphan batches: {}",
            removed.len(),
            removed.join(", ")
        );
    }

    Ok(OrphanBatchReport { removed })
}
