//! Campus entries embedded in a college document.
//!
//! Every operation here is addressed by the `(college, campus)` pair and
//! runs as one read-modify-write of the owning college document.

use crate::{
    InternalError,
    config::Config,
    dto::directory::CampusInput,
    ids::{CampusId, EntityId, EntityKind},
    log,
    log::Topic,
    ops::{
        Mutation,
        directory::{DirectoryOpsError, max_name_bytes},
        field,
    },
    storage::stable::college::{CampusRecord, CollegeStore},
};

///
/// CampusOps
///

pub struct CampusOps;

impl CampusOps {
    /// Append a new campus to the college named by `college_id`.
    pub fn add(college_id: &str, input: &CampusInput) -> Result<CampusRecord, InternalError> {
        let max_bytes = max_name_bytes()?;
        let name = field::required(EntityKind::Campus, "name", input.name.as_deref(), max_bytes)
            .map_err(DirectoryOpsError::from)?;
        let city = field::required(EntityKind::Campus, "city", input.city.as_deref(), max_bytes)
            .map_err(DirectoryOpsError::from)?;
        let logo_url = field::optional(input.logo_url.clone());
        let address = field::optional(input.address.clone());

        let max = Config::get()?.directory.max_campuses_per_college;
        let not_found = || DirectoryOpsError::not_found(EntityKind::College, college_id);
        let college = EntityId::parse(college_id).ok_or_else(not_found)?;

        let created = CollegeStore::modify(college, |record| -> Result<_, InternalError> {
            if record.campuses.len() >= max as usize {
                return Err(DirectoryOpsError::CampusLimitReached { college, max }.into());
            }

            let id = record
                .allocate_campus_id()
                .ok_or(DirectoryOpsError::CampusIdExhausted(college))?;
            let campus = CampusRecord {
                id,
                name,
                city,
                logo_url,
                address,
            };
            record.campuses.push(campus.clone());

            Ok(Some(campus))
        })?
        .ok_or_else(not_found)?;

        log!(Topic::Campus, Ok, "campus {} added to college {college}", created.id);

        Ok(created)
    }

    /// Write all four campus fields from `input`. Omitted fields are cleared.
    pub fn update(
        college_id: &str,
        campus_id: &str,
        input: &CampusInput,
    ) -> Result<Mutation, InternalError> {
        let max_bytes = max_name_bytes()?;
        let name = field::bounded(EntityKind::Campus, "name", input.name.as_deref(), max_bytes)
            .map_err(DirectoryOpsError::from)?
            .unwrap_or_default();
        let city = field::bounded(EntityKind::Campus, "city", input.city.as_deref(), max_bytes)
            .map_err(DirectoryOpsError::from)?
            .unwrap_or_default();

        let (Some(college), Some(campus)) =
            (EntityId::parse(college_id), CampusId::parse(campus_id))
        else {
            return Ok(Mutation::NoMatch);
        };

        let logo_url = field::optional(input.logo_url.clone());
        let address = field::optional(input.address.clone());

        let applied = CollegeStore::modify(college, |record| {
            let Some(entry) = record.campus_mut(campus) else {
                return Ok(None);
            };
            entry.name = name;
            entry.city = city;
            entry.logo_url = logo_url;
            entry.address = address;

            Ok::<_, InternalError>(Some(()))
        })?;

        Ok(Mutation::from(applied.is_some()))
    }

    /// Remove one campus, keeping the order of the rest.
    pub fn remove(college_id: &str, campus_id: &str) -> Result<Mutation, InternalError> {
        let (Some(college), Some(campus)) =
            (EntityId::parse(college_id), CampusId::parse(campus_id))
        else {
            return Ok(Mutation::NoMatch);
        };

        let applied = CollegeStore::modify(college, |record| {
            let before = record.campuses.len();
            record.campuses.retain(|c| c.id != campus);

            Ok::<_, InternalError>((record.campuses.len() != before).then_some(()))
        })?;

        if applied.is_some() {
            log!(Topic::Campus, Info, "campus {campus} removed from college {college}");
        }

        Ok(Mutation::from(applied.is_some()))
    }
}

///
/// TESTS
///
