use crate::{
    api::authorize,
    dto::{
        error::Error,
        submission::{SubmissionInput, SubmissionView},
    },
    workflow::submission,
};

///
/// SubmissionApi
///
/// Submitting is open to the public form; reading and deleting are admin
/// calls.
///

pub struct SubmissionApi;

impl SubmissionApi {
    pub fn submit(input: SubmissionInput) -> Result<SubmissionView, Error> {
        submission::submit(input).map_err(Error::from)
    }

    pub fn list(token: Option<&str>) -> Result<Vec<SubmissionView>, Error> {
        authorize(token)?;

        Ok(submission::list())
    }

    pub fn get(token: Option<&str>, id: &str) -> Result<SubmissionView, Error> {
        authorize(token)?;

        submission::get(id).map_err(Error::from)
    }

    pub fn delete(token: Option<&str>, id: &str) -> Result<(), Error> {
        authorize(token)?;
        submission::remove(id);

        Ok(())
    }
}
