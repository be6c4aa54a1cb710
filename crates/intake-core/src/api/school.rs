use crate::{
    api::authorize,
    dto::{
        directory::{SchoolInput, SchoolView},
        error::Error,
    },
    workflow::directory::school,
};

///
/// SchoolApi
///

pub struct SchoolApi;

impl SchoolApi {
    pub fn list() -> Result<Vec<SchoolView>, Error> {
        Ok(school::list())
    }

    pub fn get(id: &str) -> Result<SchoolView, Error> {
        school::get(id).map_err(Error::from)
    }

    pub fn create(token: Option<&str>, input: &SchoolInput) -> Result<SchoolView, Error> {
        authorize(token)?;

        school::create(input).map_err(Error::from)
    }

    pub fn update(token: Option<&str>, id: &str, input: &SchoolInput) -> Result<(), Error> {
        authorize(token)?;

        school::update(id, input).map(|_| ()).map_err(Error::from)
    }

    pub fn delete(token: Option<&str>, id: &str) -> Result<(), Error> {
        authorize(token)?;
        school::remove(id);

        Ok(())
    }
}
