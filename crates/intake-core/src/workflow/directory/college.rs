use crate::{
    dto::directory::{CampusInput, CampusView, CollegeInput, CollegeView},
    ops::directory::{campus::CampusOps, college::CollegeOps},
    workflow::{
        directory::{
            cascade::{CascadeOutcome, CollegeRemoval},
            mapper::CollegeMapper,
        },
        prelude::*,
    },
};

pub(crate) fn create(input: &CollegeInput) -> Result<CollegeView, InternalError> {
    CollegeOps::create(input).map(CollegeMapper::record_to_view)
}

pub(crate) fn get(id: &str) -> Result<CollegeView, InternalError> {
    CollegeOps::get(id).map(CollegeMapper::record_to_view)
}

pub(crate) fn list() -> Vec<CollegeView> {
    CollegeOps::list()
        .into_iter()
        .map(CollegeMapper::record_to_view)
        .collect()
}

pub(crate) fn update(id: &str, input: &CollegeInput) -> Result<Mutation, InternalError> {
    let outcome = CollegeOps::update(id, input)?;
    if !outcome.matched() {
        log!(Topic::College, Debug, "update ignored: no college {id:?}");
    }

    Ok(outcome)
}

/// Remove the college and cascade to its batches.
pub(crate) fn remove(id: &str) -> CascadeOutcome {
    CollegeRemoval::run(id)
}

// -------------------------------------------------------------
// Campuses
// -------------------------------------------------------------

pub(crate) fn add_campus(college_id: &str, input: &CampusInput) -> Result<CampusView, InternalError> {
    CampusOps::add(college_id, input).map(CollegeMapper::campus_to_view)
}

pub(crate) fn update_campus(
    college_id: &str,
    campus_id: &str,
    input: &CampusInput,
) -> Result<Mutation, InternalError> {
    let outcome = CampusOps::update(college_id, campus_id, input)?;
    if !outcome.matched() {
        log!(
            Topic::Campus,
            Debug,
            "update ignored: no campus {campus_id:?} under college {college_id:?}"
        );
    }

    Ok(outcome)
}

pub(crate) fn remove_campus(college_id: &str, campus_id: &str) -> Result<Mutation, InternalError> {
    CampusOps::remove(college_id, campus_id)
}
