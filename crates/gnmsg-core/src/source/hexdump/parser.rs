use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::reader::payload_text;
use crate::source::{MessageEvent, MessageSource, SourceError};
use crate::wire::decode_hex_bytes;

/// Reads hex-encoded messages line by line.
pub struct HexDumpSource<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl HexDumpSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        log::debug!("opened hex dump {}", path.display());
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> HexDumpSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> MessageSource for HexDumpSource<R> {
    fn next_message(&mut self) -> Result<Option<MessageEvent>, SourceError> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let Some(text) = payload_text(&self.buffer) else {
                continue;
            };
            let bytes = decode_hex_bytes(text).map_err(|err| SourceError::InvalidHex {
                line: self.line,
                message: err.to_string(),
            })?;
            log::trace!("line {}: {} byte message", self.line, bytes.len());
            return Ok(Some(MessageEvent {
                line: self.line,
                bytes,
            }));
        }
    }
}
