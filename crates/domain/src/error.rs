//! Error types for the Biq wire contract.

use thiserror::Error;

/// Failure to encode or decode a Biq structure.
///
/// A structure either decodes as a whole or fails as a whole. The only
/// tolerated unknown code is the raw `limitType` of a `BiqDeviceLimit`,
/// which never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{entity} is missing required field `{field}`")]
    MissingField { entity: &'static str, field: String },

    #[error("{entity}.{field} has unknown enumeration code {raw}")]
    UnknownEnumCode {
        entity: &'static str,
        field: String,
        raw: i64,
    },

    #[error("{entity}.{field} has the wrong type, expected {expected}")]
    TypeMismatch {
        entity: &'static str,
        field: String,
        expected: String,
    },

    #[error("Malformed {entity} payload: {detail}")]
    Malformed { entity: &'static str, detail: String },

    #[error("Payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// An integer that names no case of a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} code {raw}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub raw: i64,
}

impl UnknownCode {
    pub fn new(kind: &'static str, raw: i64) -> Self {
        Self { kind, raw }
    }
}
