use crate::{
    api::authorize,
    dto::{
        directory::{BatchInput, BatchView, OrphanBatchReport},
        error::Error,
    },
    workflow::directory::{batch, reconcile},
};

///
/// BatchApi
///

pub struct BatchApi;

impl BatchApi {
    pub fn list() -> Result<Vec<BatchView>, Error> {
        Ok(batch::list())
    }

    pub fn get(id: &str) -> Result<BatchView, Error> {
        batch::get(id).map_err(Error::from)
    }

    /// Batches recorded against `college_id`, oldest first.
    pub fn list_for_college(college_id: &str) -> Result<Vec<BatchView>, Error> {
        Ok(batch::list_for_college(college_id))
    }

    /// Create a batch. `college_id` is not checked against stored colleges.
    pub fn create(token: Option<&str>, input: &BatchInput) -> Result<BatchView, Error> {
        authorize(token)?;

        batch::create(input).map_err(Error::from)
    }

    pub fn update(token: Option<&str>, id: &str, input: &BatchInput) -> Result<(), Error> {
        authorize(token)?;

        batch::update(id, input).map(|_| ()).map_err(Error::from)
    }

    pub fn delete(token: Option<&str>, id: &str) -> Result<(), Error> {
        authorize(token)?;
        batch::remove(id);

        Ok(())
    }

    // -------------------------------------------------------------
    // Orphans
    // -------------------------------------------------------------

    pub fn list_orphans(token: Option<&str>) -> Result<Vec<BatchView>, Error> {
        authorize(token)?;

        Ok(reconcile::list_orphan_batches())
    }

    pub fn purge_orphans(token: Option<&str>) -> Result<OrphanBatchReport, Error> {
        authorize(token)?;

        reconcile::purge_orphan_batches().map_err(Error::from)
    }
}
