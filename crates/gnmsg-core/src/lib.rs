//! gnmsg core library: decoding of tagged binary client/server messages.
//!
//! A message is a fixed header followed by parts. Every part starts with a
//! 4-byte `Size` and a 1-byte `IsObject` flag, followed by kind-specific
//! fields. This crate provides:
//! - `wire`: bounds-checked big-endian primitive reads over a cursor
//! - `parts`: one pure decoder per part kind (layout/reader/parser)
//! - `message`: header decoding and part chaining
//! - `source`: hex-dump inputs (all I/O lives here)
//!
//! The analysis layer ties them together into a deterministic, versioned
//! JSON report.
//!
//! Invariants:
//! - Every field read advances the cursor by exactly its encoded width.
//! - A decoder either returns a complete record or an error, never a record
//!   with defaulted fields.
//! - Decoding is side-effect free apart from `log` output.
//!
//! # Examples
//! ```
//! use gnmsg_core::parts::{Part, PartKind, decode_part_at};
//!
//! let bytes = [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x2a];
//! let (part, next_offset) = decode_part_at(PartKind::Int, &bytes, 0)?;
//! assert_eq!(next_offset, 9);
//! assert_eq!(
//!     serde_json::to_value(&part)?,
//!     serde_json::json!({"Kind": "int", "Size": 0, "IsObject": 1, "Value": "2a"})
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
pub mod message;
pub mod parts;
pub mod source;
pub mod wire;

pub use analysis::{AnalysisError, decode_hex_dump_file, decode_source};
pub use message::{DecodedMessage, MessageError, MessageHeader};
pub use parts::{Part, PartError, PartKind};
pub use source::{HexDumpSource, MessageEvent, MessageSource, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Decode report for one input file.
///
/// # Examples
/// ```
/// use gnmsg_core::make_stub_report;
///
/// let report = make_stub_report("capture.hex", 123);
/// assert_eq!(report.report_version, gnmsg_core::REPORT_VERSION);
/// assert!(report.messages.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    pub input: InputInfo,
    /// Part kinds applied, in order, to every message.
    pub part_kinds: Vec<PartKind>,
    pub summary: DecodeSummary,
    /// One record per message, in input order.
    pub messages: Vec<MessageRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeSummary {
    pub messages_total: u64,
    pub messages_failed: u64,
    /// Parts decoded across all successful messages.
    pub parts_total: u64,
}

/// Outcome of decoding one message: either `message` or `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    /// 1-based input line.
    pub line: usize,
    /// Message length in bytes.
    pub bytes: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<DecodedMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageRecord {
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Build a report with base fields filled and nothing decoded yet.
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "gnmsg".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        part_kinds: Vec::new(),
        summary: DecodeSummary::default(),
        messages: Vec::new(),
    }
}
