use crate::{
    api::authorize,
    dto::{
        directory::{CampusInput, CampusView, CollegeInput, CollegeView},
        error::Error,
    },
    workflow::directory::college,
};

///
/// CollegeApi
///
/// Colleges and the campuses embedded in them. Campus calls are always
/// addressed through the owning college id.
///

pub struct CollegeApi;

impl CollegeApi {
    pub fn list() -> Result<Vec<CollegeView>, Error> {
        Ok(college::list())
    }

    pub fn get(id: &str) -> Result<CollegeView, Error> {
        college::get(id).map_err(Error::from)
    }

    pub fn create(token: Option<&str>, input: &CollegeInput) -> Result<CollegeView, Error> {
        authorize(token)?;

        college::create(input).map_err(Error::from)
    }

    pub fn update(token: Option<&str>, id: &str, input: &CollegeInput) -> Result<(), Error> {
        authorize(token)?;

        college::update(id, input).map(|_| ()).map_err(Error::from)
    }

    /// Delete the college and its batches. Succeeds once the college
    /// document is gone, whatever happened to the batches.
    pub fn delete(token: Option<&str>, id: &str) -> Result<(), Error> {
        authorize(token)?;
        let _ = college::remove(id);

        Ok(())
    }

    // -------------------------------------------------------------
    // Campuses
    // -------------------------------------------------------------

    pub fn add_campus(
        token: Option<&str>,
        college_id: &str,
        input: &CampusInput,
    ) -> Result<CampusView, Error> {
        authorize(token)?;

        college::add_campus(college_id, input).map_err(Error::from)
    }

    /// Overwrite all four campus fields; omitted fields are cleared.
    pub fn update_campus(
        token: Option<&str>,
        college_id: &str,
        campus_id: &str,
        input: &CampusInput,
    ) -> Result<(), Error> {
        authorize(token)?;

        college::update_campus(college_id, campus_id, input)
            .map(|_| ())
            .map_err(Error::from)
    }

    pub fn delete_campus(token: Option<&str>, college_id: &str, campus_id: &str) -> Result<(), Error> {
        authorize(token)?;

        college::remove_campus(college_id, campus_id)
            .map(|_| ())
            .map_err(Error::from)
    }
}
