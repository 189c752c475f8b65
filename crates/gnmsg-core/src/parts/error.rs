use thiserror::Error;

use crate::wire::WireError;

/// Errors returned by part decoding.
///
/// Every variant means the part could not be laid over the remaining bytes;
/// no partial record is ever produced.
///
/// # Examples
/// ```
/// use gnmsg_core::parts::PartError;
///
/// let err = PartError::InvalidLength { field: "Name", length: -1 };
/// assert!(err.to_string().contains("invalid length"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartError {
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error("invalid length for {field}: {length}")]
    InvalidLength { field: &'static str, length: i64 },
}

/// Returned when a part kind name or tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown part kind '{0}' (expected one of: object, int, region, event-id, bool)")]
pub struct UnknownPartKind(pub String);
