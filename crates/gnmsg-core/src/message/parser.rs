use serde::{Deserialize, Serialize};

use super::error::MessageError;
use super::layout;
use crate::parts::{Part, PartKind, decode_part};
use crate::wire::{WireCursor, WireError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeader {
    #[serde(rename = "MessageType")]
    pub message_type: i32,
    #[serde(rename = "PayloadLength")]
    pub payload_length: i32,
    #[serde(rename = "NumberOfParts")]
    pub number_of_parts: i32,
    #[serde(rename = "TransactionId")]
    pub transaction_id: i32,
    #[serde(rename = "Flags")]
    pub flags: u8,
}

/// A message whose header and requested parts decoded cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedMessage {
    pub header: MessageHeader,
    pub parts: Vec<Part>,
    /// Parts announced by the header that no kind was supplied for.
    pub undecoded_parts: u32,
    /// Bytes left in the buffer after the last decoded part.
    pub trailing_bytes: usize,
}

pub fn read_message_header(cursor: &mut WireCursor<'_>) -> Result<MessageHeader, WireError> {
    cursor.require(layout::FIELD_MESSAGE_TYPE, layout::HEADER_LEN)?;
    Ok(MessageHeader {
        message_type: cursor.read_i32(layout::FIELD_MESSAGE_TYPE)?,
        payload_length: cursor.read_i32(layout::FIELD_PAYLOAD_LENGTH)?,
        number_of_parts: cursor.read_i32(layout::FIELD_NUMBER_OF_PARTS)?,
        transaction_id: cursor.read_i32(layout::FIELD_TRANSACTION_ID)?,
        flags: cursor.read_u8(layout::FIELD_FLAGS)?,
    })
}

/// Decode a message header followed by one part per entry of `kinds`.
///
/// At most `NumberOfParts` parts are decoded; extra kinds are ignored. The
/// first part that fails aborts the whole message.
///
/// # Examples
/// ```
/// use gnmsg_core::message::decode_message;
/// use gnmsg_core::parts::PartKind;
///
/// let mut bytes: Vec<u8> = vec![0, 0, 0, 7, 0, 0, 0, 6, 0, 0, 0, 1, 0, 0, 0, 9, 0];
/// bytes.extend_from_slice(&[0, 0, 0, 1, 0, 1]);
/// let message = decode_message(&bytes, &[PartKind::Bool]).unwrap();
/// assert_eq!(message.header.message_type, 7);
/// assert_eq!(message.parts.len(), 1);
/// assert_eq!(message.trailing_bytes, 0);
/// ```
pub fn decode_message(bytes: &[u8], kinds: &[PartKind]) -> Result<DecodedMessage, MessageError> {
    let mut cursor = WireCursor::new(bytes);
    let header = read_message_header(&mut cursor).map_err(MessageError::Header)?;
    let announced = usize::try_from(header.number_of_parts).unwrap_or(0);
    log::debug!(
        "message type {} tx {}: {} part(s) announced, {} kind(s) supplied",
        header.message_type,
        header.transaction_id,
        announced,
        kinds.len()
    );

    let mut parts = Vec::with_capacity(kinds.len().min(announced));
    for (index, kind) in kinds.iter().copied().take(announced).enumerate() {
        parts.push(decode_indexed_part(&mut cursor, index, kind)?);
    }

    let undecoded_parts = u32::try_from(announced - parts.len()).unwrap_or(u32::MAX);
    Ok(DecodedMessage {
        header,
        parts,
        undecoded_parts,
        trailing_bytes: cursor.remaining(),
    })
}

/// Decode parts that each carry a leading one-byte kind tag, until the
/// buffer is exhausted.
///
/// # Examples
/// ```
/// use gnmsg_core::message::scan_tagged_parts;
/// use gnmsg_core::parts::{PartKind, Part};
///
/// let bytes = [PartKind::Bool.tag(), 0, 0, 0, 1, 0, 0];
/// let parts = scan_tagged_parts(&bytes).unwrap();
/// assert!(matches!(&parts[0], Part::Bool(part) if part.value == "False"));
/// ```
pub fn scan_tagged_parts(bytes: &[u8]) -> Result<Vec<Part>, MessageError> {
    let mut cursor = WireCursor::new(bytes);
    let mut parts = Vec::new();
    while !cursor.is_exhausted() {
        let offset = cursor.position();
        let tag = cursor
            .read_u8(layout::FIELD_PART_TAG)
            .map_err(MessageError::Tag)?;
        let kind = PartKind::from_tag(tag).ok_or(MessageError::UnknownTag { offset, tag })?;
        let index = parts.len();
        parts.push(decode_indexed_part(&mut cursor, index, kind)?);
    }
    Ok(parts)
}

fn decode_indexed_part(
    cursor: &mut WireCursor<'_>,
    index: usize,
    kind: PartKind,
) -> Result<Part, MessageError> {
    let offset = cursor.position();
    let part = decode_part(kind, cursor).map_err(|source| MessageError::Part {
        index,
        kind,
        offset,
        source,
    })?;
    log::trace!(
        "part {} ({}) at offset {}..{}",
        index,
        kind,
        offset,
        cursor.position()
    );
    Ok(part)
}
