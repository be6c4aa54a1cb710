use crate::{
    dto::directory::{BatchInput, BatchView},
    ops::directory::batch::BatchOps,
    storage::stable::batch::BatchRecord,
    workflow::{directory::mapper::BatchMapper, prelude::*},
};

fn to_views(records: Vec<BatchRecord>) -> Vec<BatchView> {
    records.into_iter().map(BatchMapper::record_to_view).collect()
}

pub(crate) fn create(input: &BatchInput) -> Result<BatchView, InternalError> {
    BatchOps::create(input).map(BatchMapper::record_to_view)
}

pub(crate) fn get(id: &str) -> Result<BatchView, InternalError> {
    BatchOps::get(id).map(BatchMapper::record_to_view)
}

pub(crate) fn list() -> Vec<BatchView> {
    to_views(BatchOps::list())
}

pub(crate) fn list_for_college(college_id: &str) -> Vec<BatchView> {
    to_views(BatchOps::list_for_college(college_id))
}

pub(crate) fn update(id: &str, input: &BatchInput) -> Result<Mutation, InternalError> {
    let outcome = BatchOps::update(id, input)?;
    if !outcome.matched() {
        log!(Topic::Batch, Debug, "update ignored: no batch {id:?}");
    }

    Ok(outcome)
}

pub(crate) fn remove(id: &str) -> Mutation {
    BatchOps::remove(id)
}
