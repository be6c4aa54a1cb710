use crate::{
    InternalError,
    dto::directory::CollegeInput,
    ids::{EntityId, EntityKind},
    log,
    log::Topic,
    ops::{
        Mutation,
        directory::{DirectoryOpsError, max_name_bytes, sort_by_creation},
        field,
    },
    storage::stable::{
        college::{CollegeRecord, CollegeStore},
        sequence::SequenceStore,
    },
    utils::time,
};

///
/// CollegeOps
///

pub struct CollegeOps;

impl CollegeOps {
    pub fn create(input: &CollegeInput) -> Result<CollegeRecord, InternalError> {
        let name = field::required(
            EntityKind::College,
            "name",
            input.name.as_deref(),
            max_name_bytes()?,
        )
        .map_err(DirectoryOpsError::from)?;

        let record = CollegeRecord {
            id: SequenceStore::next(EntityKind::College)?,
            name,
            logo_url: field::optional(input.logo_url.clone()),
            campuses: Vec::new(),
            next_campus_id: 0,
            created_at: time::now_millis(),
        };
        CollegeStore::insert(&record)?;

        log!(Topic::College, Ok, "college {} created", record.id);

        Ok(record)
    }

    pub fn get(id: &str) -> Result<CollegeRecord, InternalError> {
        EntityId::parse(id)
            .map(CollegeStore::get)
            .transpose()?
            .flatten()
            .ok_or_else(|| DirectoryOpsError::not_found(EntityKind::College, id).into())
    }

    #[must_use]
    pub fn list() -> Vec<CollegeRecord> {
        let mut records = CollegeStore::all();
        sort_by_creation(&mut records, |r| (r.created_at, r.id));

        records
    }

    /// Whether `college_id` is the canonical id of a stored college.
    #[must_use]
    pub fn resolves(college_id: &str) -> bool {
        EntityId::parse(college_id).is_some_and(CollegeStore::contains)
    }

    /// Overwrite the supplied fields. A blank name is treated as omitted; a
    /// supplied blank `logo_url` clears the logo.
    pub fn update(id: &str, input: &CollegeInput) -> Result<Mutation, InternalError> {
        let name = field::bounded(
            EntityKind::College,
            "name",
            input.name.as_deref(),
            max_name_bytes()?,
        )
        .map_err(DirectoryOpsError::from)?;

        let Some(id) = EntityId::parse(id) else {
            return Ok(Mutation::NoMatch);
        };
        let logo_url = input.logo_url.clone().map(|v| field::optional(Some(v)));

        let applied = CollegeStore::modify(id, |record| {
            if let Some(name) = name {
                record.name = name;
            }
            if let Some(logo_url) = logo_url {
                record.logo_url = logo_url;
            }
            Ok::<_, InternalError>(Some(()))
        })?;

        Ok(Mutation::from(applied.is_some()))
    }

    /// Remove the college document only. Dependent batches are handled by
    /// the cascade in `workflow::directory::cascade`.
    pub fn remove(id: EntityId) -> Mutation {
        let removed = CollegeStore::remove(id);
        if removed {
            log!(Topic::College, Info, "college {id} removed");
        }

        Mutation::from(removed)
    }
}

///
/// TESTS
///
