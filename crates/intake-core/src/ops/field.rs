//! Field rules shared by directory and submission ops.
//!
//! A required field is missing when it is absent, empty, or whitespace only.
//! Values are stored trimmed.

use crate::{InternalError, InternalErrorOrigin, ids::EntityKind};
use thiserror::Error as ThisError;

///
/// FieldError
///

#[derive(Debug, ThisError)]
pub enum FieldError {
    #[error("{kind} {field} is required")]
    Missing {
        kind: EntityKind,
        field: &'static str,
    },

    #[error("{kind} {field} exceeds {max} bytes")]
    TooLong {
        kind: EntityKind,
        field: &'static str,
        max: usize,
    },
}

impl From<FieldError> for InternalError {
    fn from(err: FieldError) -> Self {
        Self::validation(InternalErrorOrigin::Ops, err.to_string())
    }
}

/// Trim `value`, returning `None` when nothing is left.
#[must_use]
pub fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Require a non-blank value no longer than `max` bytes.
pub fn required(
    kind: EntityKind,
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<String, FieldError> {
    let value = trimmed(value).ok_or(FieldError::Missing { kind, field })?;

    if value.len() > max {
        return Err(FieldError::TooLong { kind, field, max });
    }

    Ok(value)
}

/// Trim an update value. Blank becomes `None`; anything left must fit in
/// `max` bytes.
pub fn bounded(
    kind: EntityKind,
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, FieldError> {
    match trimmed(value) {
        Some(v) if v.len() > max => Err(FieldError::TooLong { kind, field, max }),
        other => Ok(other),
    }
}

/// Normalize an optional field: blank becomes `None`.
#[must_use]
pub fn optional(value: Option<String>) -> Option<String> {
    trimmed(value.as_deref())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_absent_and_blank_values() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = required(EntityKind::School, "name", value, 10).unwrap_err();
            assert!(
                matches!(err, FieldError::Missing { field: "name", .. }),
                "value {value:?}"
            );
        }
    }

    #[test]
    fn required_trims_and_enforces_length() {
        assert_eq!(
            required(EntityKind::Batch, "name", Some("  2024 "), 4).expect("fits"),
            "2024"
        );

        let err = required(EntityKind::Batch, "name", Some("20245"), 4).unwrap_err();
        assert!(matches!(err, FieldError::TooLong { max: 4, .. }));
    }

    #[test]
    fn bounded_keeps_blank_as_omitted_and_rejects_oversize() {
        assert_eq!(bounded(EntityKind::School, "name", Some("  "), 4).expect("blank"), None);
        assert_eq!(bounded(EntityKind::School, "name", None, 4).expect("absent"), None);
        assert_eq!(
            bounded(EntityKind::School, "name", Some(" abcd "), 4).expect("fits"),
            Some("abcd".to_string())
        );

        let err = bounded(EntityKind::School, "name", Some("abcde"), 4).unwrap_err();
        assert!(matches!(err, FieldError::TooLong { field: "name", max: 4, .. }));
    }

    #[test]
    fn optional_blank_becomes_none() {
        assert_eq!(optional(Some("  ".to_string())), None);
        assert_eq!(optional(None), None);
        assert_eq!(
            optional(Some(" https://x/logo.png ".to_string())).as_deref(),
            Some("https://x/logo.png")
        );
    }
}
