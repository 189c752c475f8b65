//! Hex-dump text source.
//!
//! One message per line, two hex digits per byte. Blank lines and `#`
//! comments are skipped. Anything up to the last `:` on a line is treated as
//! a label, so log lines such as
//! `[debug 2024/05/01 10:00:00.123] sending message: 00000007...` work as-is.

pub mod parser;
pub mod reader;

pub use parser::HexDumpSource;
