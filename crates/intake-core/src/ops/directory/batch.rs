use crate::{
    InternalError,
    dto::directory::BatchInput,
    ids::{EntityId, EntityKind},
    log,
    log::Topic,
    ops::{
        Mutation,
        directory::{DirectoryOpsError, college::CollegeOps, max_name_bytes, sort_by_creation},
        field,
    },
    storage::stable::{
        batch::{BatchRecord, BatchStore},
        sequence::SequenceStore,
    },
    utils::time,
};

///
/// BatchOps
///
/// `college_id` is stored as supplied (trimmed) without checking that it
/// names an existing college.
///

pub struct BatchOps;

impl BatchOps {
    pub fn create(input: &BatchInput) -> Result<BatchRecord, InternalError> {
        let max_bytes = max_name_bytes()?;
        let name = field::required(EntityKind::Batch, "name", input.name.as_deref(), max_bytes)
            .map_err(DirectoryOpsError::from)?;
        let college_id = field::required(
            EntityKind::Batch,
            "college_id",
            input.college_id.as_deref(),
            max_bytes,
        )
        .map_err(DirectoryOpsError::from)?;

        let record = BatchRecord {
            id: SequenceStore::next(EntityKind::Batch)?,
            name,
            college_id,
            created_at: time::now_millis(),
        };
        BatchStore::insert(&record)?;

        if !CollegeOps::resolves(&record.college_id) {
            log!(
                Topic::Batch,
                Warn,
                "batch {} created with unresolved college_id {:?}",
                record.id,
                record.college_id
            );
        }
        log!(Topic::Batch, Ok, "batch {} created", record.id);

        Ok(record)
    }

    pub fn get(id: &str) -> Result<BatchRecord, InternalError> {
        EntityId::parse(id)
            .map(BatchStore::get)
            .transpose()?
            .flatten()
            .ok_or_else(|| DirectoryOpsError::not_found(EntityKind::Batch, id).into())
    }

    #[must_use]
    pub fn list() -> Vec<BatchRecord> {
        Self::list_where(|_| true)
    }

    /// Batches whose `college_id` equals `college_id` (trimmed).
    #[must_use]
    pub fn list_for_college(college_id: &str) -> Vec<BatchRecord> {
        let college_id = college_id.trim();

        Self::list_where(|b| b.college_id == college_id)
    }

    /// Batches whose `college_id` names no stored college.
    #[must_use]
    pub fn list_orphans() -> Vec<BatchRecord> {
        Self::list_where(|b| !CollegeOps::resolves(&b.college_id))
    }

    fn list_where(pred: impl Fn(&BatchRecord) -> bool) -> Vec<BatchRecord> {
        let mut records: Vec<_> = BatchStore::all().into_iter().filter(pred).collect();
        sort_by_creation(&mut records, |r| (r.created_at, r.id));

        records
    }

    /// Overwrite the supplied fields. Blank values are treated as omitted.
    pub fn update(id: &str, input: &BatchInput) -> Result<Mutation, InternalError> {
        let max_bytes = max_name_bytes()?;
        let name = field::bounded(EntityKind::Batch, "name", input.name.as_deref(), max_bytes)
            .map_err(DirectoryOpsError::from)?;
        let college_id = field::bounded(
            EntityKind::Batch,
            "college_id",
            input.college_id.as_deref(),
            max_bytes,
        )
        .map_err(DirectoryOpsError::from)?;

        let Some(id) = EntityId::parse(id) else {
            return Ok(Mutation::NoMatch);
        };

        let applied = BatchStore::modify(id, |record| {
            if let Some(name) = name {
                record.name = name;
            }
            if let Some(college_id) = college_id {
                record.college_id = college_id;
            }
            Ok::<_, InternalError>(Some(()))
        })?;

        Ok(Mutation::from(applied.is_some()))
    }

    pub fn remove(id: &str) -> Mutation {
        let removed = EntityId::parse(id).is_some_and(BatchStore::remove);
        if removed {
            log!(Topic::Batch, Info, "batch {id} removed");
        }

        Mutation::from(removed)
    }

    /// Remove every batch referencing `college_id`; returns the removed ids.
    pub fn remove_for_college(college_id: EntityId) -> Result<Vec<EntityId>, InternalError> {
        let college_id = college_id.to_string();

        Ok(BatchStore::remove_where(|c| c == college_id)?)
    }

    /// Remove every orphan batch; returns the removed ids.
    pub fn remove_orphans() -> Result<Vec<EntityId>, InternalError> {
        Ok(BatchStore::remove_where(|c| !CollegeOps::resolves(c))?)
    }
}

///
/// TESTS
///
