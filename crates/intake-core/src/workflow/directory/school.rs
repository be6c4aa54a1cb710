use crate::{
    dto::directory::{SchoolInput, SchoolView},
    ops::directory::school::SchoolOps,
    workflow::{directory::mapper::SchoolMapper, prelude::*},
};

pub(crate) fn create(input: &SchoolInput) -> Result<SchoolView, InternalError> {
    SchoolOps::create(input).map(SchoolMapper::record_to_view)
}

pub(crate) fn get(id: &str) -> Result<SchoolView, InternalError> {
    SchoolOps::get(id).map(SchoolMapper::record_to_view)
}

pub(crate) fn list() -> Vec<SchoolView> {
    SchoolOps::list()
        .into_iter()
        .map(SchoolMapper::record_to_view)
        .collect()
}

pub(crate) fn update(id: &str, input: &SchoolInput) -> Result<Mutation, InternalError> {
    let outcome = SchoolOps::update(id, input)?;
    if !outcome.matched() {
        log!(Topic::School, Debug, "update ignored: no school {id:?}");
    }

    Ok(outcome)
}

pub(crate) fn remove(id: &str) -> Mutation {
    SchoolOps::remove(id)
}
