use crate::{
    InternalError, InternalErrorOrigin,
    config::Config,
    dto::submission::SubmissionInput,
    ids::{EntityId, EntityKind},
    log,
    log::Topic,
    ops::{Mutation, field, field::FieldError},
    storage::stable::{
        sequence::SequenceStore,
        submission::{MeasurementRecord, SubmissionRecord, SubmissionStore},
    },
    utils::time,
};
use thiserror::Error as ThisError;

///
/// SubmissionOpsError
///

#[derive(Debug, ThisError)]
pub enum SubmissionOpsError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("submission carries {count} measurements; at most {max} allowed")]
    TooManyMeasurements { count: usize, max: u32 },

    #[error("measurement {index} has an empty label")]
    UnlabelledMeasurement { index: usize },

    #[error("measurement {label:?} must be a finite positive number")]
    InvalidMeasurement { label: String },

    #[error("submission {0} not found")]
    NotFound(String),
}

impl From<SubmissionOpsError> for InternalError {
    fn from(err: SubmissionOpsError) -> Self {
        match err {
            SubmissionOpsError::Field(err) => err.into(),
            SubmissionOpsError::NotFound(_) => {
                Self::not_found(InternalErrorOrigin::Ops, err.to_string())
            }
            _ => Self::validation(InternalErrorOrigin::Ops, err.to_string()),
        }
    }
}

///
/// SubmissionOps
///

pub struct SubmissionOps;

impl SubmissionOps {
    pub fn create(input: SubmissionInput) -> Result<SubmissionRecord, InternalError> {
        let cfg = Config::get()?;
        let student_name = field::required(
            EntityKind::Submission,
            "student_name",
            input.student_name.as_deref(),
            cfg.directory.max_name_bytes,
        )
        .map_err(SubmissionOpsError::from)?;

        let max = cfg.submission.max_measurements;
        if input.measurements.len() > max as usize {
            return Err(SubmissionOpsError::TooManyMeasurements {
                count: input.measurements.len(),
                max,
            }
            .into());
        }

        let mut measurements = Vec::with_capacity(input.measurements.len());
        for (index, m) in input.measurements.into_iter().enumerate() {
            let label = field::trimmed(Some(m.label.as_str()))
                .ok_or(SubmissionOpsError::UnlabelledMeasurement { index })?;
            if !m.value.is_finite() || m.value <= 0.0 {
                return Err(SubmissionOpsError::InvalidMeasurement { label }.into());
            }
            measurements.push(MeasurementRecord {
                label,
                value: m.value,
            });
        }

        let record = SubmissionRecord {
            id: SequenceStore::next(EntityKind::Submission)?,
            student_name,
            contact: field::optional(input.contact),
            school: field::optional(input.school),
            college: field::optional(input.college),
            campus: field::optional(input.campus),
            batch: field::optional(input.batch),
            measurements,
            created_at: time::now_millis(),
        };
        SubmissionStore::insert(&record)?;

        log!(Topic::Submission, Ok, "submission {} received", record.id);

        Ok(record)
    }

    pub fn get(id: &str) -> Result<SubmissionRecord, InternalError> {
        EntityId::parse(id)
            .map(SubmissionStore::get)
            .transpose()?
            .flatten()
            .ok_or_else(|| SubmissionOpsError::NotFound(id.to_string()).into())
    }

    /// All submissions, oldest first.
    #[must_use]
    pub fn list() -> Vec<SubmissionRecord> {
        let mut records = SubmissionStore::all();
        records.sort_by_key(|r| (r.created_at, r.id));

        records
    }

    pub fn remove(id: &str) -> Mutation {
        let removed = EntityId::parse(id).is_some_and(SubmissionStore::remove);
        if removed {
            log!(Topic::Submission, Info, "submission {id} removed");
        }

        Mutation::from(removed)
    }
}

///
/// TESTS
///
