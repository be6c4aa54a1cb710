use crate::{
    InternalError, InternalErrorClass,
    access::AccessError,
    dto::error::{Error as PublicError, ErrorCode},
};

impl From<InternalError> for PublicError {
    fn from(err: InternalError) -> Self {
        match err.class() {
            // ---------------------------------------------------------
            // Access / authorization
            // ---------------------------------------------------------
            InternalErrorClass::Access => Self::new(ErrorCode::Unauthorized, err.message().to_string()),

            // ---------------------------------------------------------
            // Caller input
            // ---------------------------------------------------------
            InternalErrorClass::Validation => {
                Self::new(ErrorCode::InvalidInput, err.message().to_string())
            }
            InternalErrorClass::NotFound => {
                Self::new(ErrorCode::NotFound, err.message().to_string())
            }
            InternalErrorClass::Exhausted => {
                Self::new(ErrorCode::ResourceExhausted, err.message().to_string())
            }

            // ---------------------------------------------------------
            // Store / configuration
            // ---------------------------------------------------------
            InternalErrorClass::Config | InternalErrorClass::Store => {
                let (class, origin) = err.log_fields();
                Self::internal(format!("internal error ({class}/{origin})"))
            }
        }
    }
}

impl From<AccessError> for PublicError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Auth(e) => Self::new(ErrorCode::Unauthorized, e.to_string()),
        }
    }
}

///
/// TESTS
///
