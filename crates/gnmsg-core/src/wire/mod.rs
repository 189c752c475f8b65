//! Primitive wire readers.
//!
//! All multi-byte values are big-endian. `WireCursor` owns the read offset so
//! decoders never do offset arithmetic themselves; the free functions in
//! `reader` expose the same reads as `(payload, offset) -> (value, offset)`
//! for callers that thread offsets explicitly.

pub mod error;
pub mod format;
pub mod reader;

pub use error::WireError;
pub use format::{decode_hex_bytes, int_to_hex_string};
pub use reader::{
    WireCursor, read_at, read_byte_value, read_int_value, read_long_value, read_string_value,
};
