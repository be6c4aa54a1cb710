use crate::access::AccessError;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Internal, structured error type.
///
/// This error:
/// - is NOT Candid-exposed
/// - is NOT stable across versions
/// - may evolve freely
///
/// Every api wrapper converts this into the public error envelope defined
/// in dto/.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub(crate) struct InternalError {
    class: InternalErrorClass,
    origin: InternalErrorOrigin,
    message: String,
}

impl InternalError {
    pub fn new(
        class: InternalErrorClass,
        origin: InternalErrorOrigin,
        message: impl Into<String>,
    ) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    pub fn validation(origin: InternalErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(InternalErrorClass::Validation, origin, message)
    }

    pub fn not_found(origin: InternalErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(InternalErrorClass::NotFound, origin, message)
    }

    pub fn exhausted(origin: InternalErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(InternalErrorClass::Exhausted, origin, message)
    }

    pub fn store(origin: InternalErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(InternalErrorClass::Store, origin, message)
    }

    pub fn config(origin: InternalErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(InternalErrorClass::Config, origin, message)
    }

    pub const fn class(&self) -> InternalErrorClass {
        self.class
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn log_fields(&self) -> (InternalErrorClass, InternalErrorOrigin) {
        (self.class, self.origin)
    }
}

impl From<AccessError> for InternalError {
    fn from(err: AccessError) -> Self {
        Self::new(
            InternalErrorClass::Access,
            InternalErrorOrigin::Access,
            err.to_string(),
        )
    }
}

///
/// InternalErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub(crate) enum InternalErrorClass {
    Access,
    Config,
    Exhausted,
    NotFound,
    Store,
    Validation,
}

///
/// InternalErrorOrigin
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub(crate) enum InternalErrorOrigin {
    Access,
    Config,
    Ops,
    Storage,
}
