//! Message-level scanning.
//!
//! A message is a fixed 17-byte header followed by parts. The header says how
//! many parts follow but not their kinds, so callers either supply the
//! expected kinds (`decode_message`) or the message carries a tag byte in
//! front of every part (`scan_tagged_parts`).

pub mod error;
pub mod layout;
pub mod parser;

pub use error::MessageError;
pub use parser::{
    DecodedMessage, MessageHeader, decode_message, read_message_header, scan_tagged_parts,
};
