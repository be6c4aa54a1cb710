use crate::{
    InternalError,
    dto::directory::SchoolInput,
    ids::{EntityId, EntityKind},
    log,
    log::Topic,
    ops::{
        Mutation,
        directory::{DirectoryOpsError, max_name_bytes, sort_by_creation},
        field,
    },
    storage::stable::{
        school::{SchoolRecord, SchoolStore},
        sequence::SequenceStore,
    },
    utils::time,
};

///
/// SchoolOps
///

pub struct SchoolOps;

impl SchoolOps {
    pub fn create(input: &SchoolInput) -> Result<SchoolRecord, InternalError> {
        let name = field::required(
            EntityKind::School,
            "name",
            input.name.as_deref(),
            max_name_bytes()?,
        )
        .map_err(DirectoryOpsError::from)?;

        let record = SchoolRecord {
            id: SequenceStore::next(EntityKind::School)?,
            name,
            created_at: time::now_millis(),
        };
        SchoolStore::insert(&record)?;

        log!(Topic::School, Ok, "school {} created", record.id);

        Ok(record)
    }

    pub fn get(id: &str) -> Result<SchoolRecord, InternalError> {
        EntityId::parse(id)
            .map(SchoolStore::get)
            .transpose()?
            .flatten()
            .ok_or_else(|| DirectoryOpsError::not_found(EntityKind::School, id).into())
    }

    #[must_use]
    pub fn list() -> Vec<SchoolRecord> {
        let mut records = SchoolStore::all();
        sort_by_creation(&mut records, |r| (r.created_at, r.id));

        records
    }

    /// Overwrite the supplied fields. A blank name is treated as omitted; an
    /// oversize one is rejected before the id is looked up.
    pub fn update(id: &str, input: &SchoolInput) -> Result<Mutation, InternalError> {
        let name = field::bounded(
            EntityKind::School,
            "name",
            input.name.as_deref(),
            max_name_bytes()?,
        )
        .map_err(DirectoryOpsError::from)?;

        let Some(id) = EntityId::parse(id) else {
            return Ok(Mutation::NoMatch);
        };

        let applied = SchoolStore::modify(id, |record| {
            if let Some(name) = name {
                record.name = name;
            }
            Ok::<_, InternalError>(Some(()))
        })?;

        Ok(Mutation::from(applied.is_some()))
    }

    pub fn remove(id: &str) -> Mutation {
        let removed = EntityId::parse(id).is_some_and(SchoolStore::remove);
        if removed {
            log!(Topic::School, Info, "school {id} removed");
        }

        Mutation::from(removed)
    }
}

///
/// TESTS
///
