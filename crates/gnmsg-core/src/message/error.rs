use thiserror::Error;

use crate::parts::{PartError, PartKind};
use crate::wire::WireError;

/// Errors returned while scanning a whole message.
///
/// # Examples
/// ```
/// use gnmsg_core::message::MessageError;
///
/// let err = MessageError::UnknownTag { offset: 17, tag: 0x7f };
/// assert!(err.to_string().contains("unknown part tag"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("invalid message header: {0}")]
    Header(#[source] WireError),
    #[error("cannot read part tag: {0}")]
    Tag(#[source] WireError),
    #[error("unknown part tag {tag:#04x} at offset {offset}")]
    UnknownTag { offset: usize, tag: u8 },
    #[error("part {index} ({kind}) at offset {offset}: {source}")]
    Part {
        index: usize,
        kind: PartKind,
        offset: usize,
        #[source]
        source: PartError,
    },
}
