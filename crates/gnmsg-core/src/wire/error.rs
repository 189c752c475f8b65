use thiserror::Error;

/// Errors returned by primitive wire reads.
///
/// # Examples
/// ```
/// use gnmsg_core::wire::WireError;
///
/// let err = WireError::TooShort {
///     field: "Size",
///     offset: 3,
///     needed: 4,
///     actual: 1,
/// };
/// assert!(err.to_string().contains("payload too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("payload too short reading {field} at offset {offset}: need {needed} bytes, got {actual}")]
    TooShort {
        field: &'static str,
        offset: usize,
        needed: usize,
        actual: usize,
    },
}
