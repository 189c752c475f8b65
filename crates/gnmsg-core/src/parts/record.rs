use serde::{Deserialize, Serialize};

use super::kind::PartKind;

/// `Size` and `IsObject`, the two fields every part starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartHeader {
    #[serde(rename = "Size")]
    pub size: i32,
    #[serde(rename = "IsObject")]
    pub is_object: u8,
}

/// Opaque serialized object; only its header is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPart {
    #[serde(flatten)]
    pub header: PartHeader,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntPart {
    #[serde(flatten)]
    pub header: PartHeader,
    /// Hex rendering of the 32-bit value, e.g. `"2a"`.
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPart {
    #[serde(flatten)]
    pub header: PartHeader,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Distributed event id: (thread id, sequence) with their type-code bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventIdPart {
    #[serde(flatten)]
    pub header: PartHeader,
    #[serde(rename = "LongCode1")]
    pub long_code_1: u8,
    #[serde(rename = "EventIdThread")]
    pub event_id_thread: i64,
    #[serde(rename = "LongCode2")]
    pub long_code_2: u8,
    #[serde(rename = "EventIdSequence")]
    pub event_id_sequence: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanPart {
    #[serde(flatten)]
    pub header: PartHeader,
    /// `"True"` or `"False"`.
    #[serde(rename = "Value")]
    pub value: String,
}

/// A decoded part of any kind.
///
/// Serialized with a `Kind` tag next to the wire field names.
///
/// # Examples
/// ```
/// use gnmsg_core::parts::{IntPart, Part, PartHeader};
///
/// let part = Part::Int(IntPart {
///     header: PartHeader { size: 0, is_object: 1 },
///     value: "2a".to_string(),
/// });
/// let json = serde_json::to_value(&part).unwrap();
/// assert_eq!(json["Kind"], "int");
/// assert_eq!(json["Value"], "2a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Kind", rename_all = "kebab-case")]
pub enum Part {
    Object(ObjectPart),
    Int(IntPart),
    Region(RegionPart),
    EventId(EventIdPart),
    Bool(BooleanPart),
}

impl Part {
    pub fn kind(&self) -> PartKind {
        match self {
            Part::Object(_) => PartKind::Object,
            Part::Int(_) => PartKind::Int,
            Part::Region(_) => PartKind::Region,
            Part::EventId(_) => PartKind::EventId,
            Part::Bool(_) => PartKind::Bool,
        }
    }

    pub fn header(&self) -> PartHeader {
        match self {
            Part::Object(part) => part.header,
            Part::Int(part) => part.header,
            Part::Region(part) => part.header,
            Part::EventId(part) => part.header,
            Part::Bool(part) => part.header,
        }
    }
}
