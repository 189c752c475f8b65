//! Message sources.
//!
//! Sources own all I/O and hand raw message bytes to the decoding layer one
//! message at a time.

pub mod hexdump;

pub use hexdump::HexDumpSource;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    /// 1-based line number the message was read from.
    pub line: usize,
    pub bytes: Vec<u8>,
}

pub trait MessageSource {
    fn next_message(&mut self) -> Result<Option<MessageEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex on line {line}: {message}")]
    InvalidHex { line: usize, message: String },
}
