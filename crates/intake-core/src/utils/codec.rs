//!
//! CBOR document codec for stable-memory records.
//!
//! Records are stored as raw bytes and decoded on read so that a damaged
//! document surfaces as an error instead of trapping inside `Storable`.
//!

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

///
/// CodecError
///

#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("encode error: {0}")]
    Encode(String),

    #[error("decode error: {0}")]
    Decode(String),
}

/// Encode a record into CBOR bytes.
pub fn encode<T>(value: &T) -> Result<Vec<u8>, CodecError>
where
    T: Serialize,
{
    serde_cbor::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode CBOR bytes into a record.
pub fn decode<T>(bytes: &[u8]) -> Result<T, CodecError>
where
    T: DeserializeOwned,
{
    serde_cbor::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

///
/// TESTS
///
