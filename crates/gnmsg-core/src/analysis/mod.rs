use std::path::Path;

use thiserror::Error;

use crate::message::decode_message;
use crate::parts::PartKind;
use crate::source::{HexDumpSource, MessageEvent, MessageSource, SourceError};
use crate::{DecodeSummary, MessageRecord, Report, make_stub_report};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Decode every message of a hex-dump file with the given part kinds.
pub fn decode_hex_dump_file(path: &Path, kinds: &[PartKind]) -> Result<Report, AnalysisError> {
    let source = HexDumpSource::open(path)?;
    decode_source(path, source, kinds)
}

/// Decode every message produced by `source`.
///
/// A message that fails to decode is recorded with its error and the scan
/// moves on to the next one; only source errors abort the run.
pub fn decode_source<S: MessageSource>(
    path: &Path,
    mut source: S,
    kinds: &[PartKind],
) -> Result<Report, AnalysisError> {
    let mut messages = Vec::new();
    let mut summary = DecodeSummary::default();

    while let Some(MessageEvent { line, bytes }) = source.next_message()? {
        summary.messages_total += 1;
        let record = match decode_message(&bytes, kinds) {
            Ok(message) => {
                summary.parts_total += message.parts.len() as u64;
                MessageRecord {
                    line,
                    bytes: bytes.len(),
                    message: Some(message),
                    error: None,
                }
            }
            Err(err) => {
                log::warn!("line {}: {}", line, err);
                summary.messages_failed += 1;
                MessageRecord {
                    line,
                    bytes: bytes.len(),
                    message: None,
                    error: Some(err.to_string()),
                }
            }
        };
        messages.push(record);
    }

    let input_bytes = path.metadata().map(|meta| meta.len()).unwrap_or(0);
    let mut report = make_stub_report(&path.display().to_string(), input_bytes);
    report.part_kinds = kinds.to_vec();
    report.summary = summary;
    report.messages = messages;
    Ok(report)
}
