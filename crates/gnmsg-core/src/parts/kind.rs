use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnknownPartKind;
use super::layout;

/// Part kinds understood by the decoder set.
///
/// Each kind has a one-byte tag (used when a message carries the tag in front
/// of every part) and a stable textual name.
///
/// # Examples
/// ```
/// use gnmsg_core::parts::PartKind;
///
/// let kind: PartKind = "event-id".parse().unwrap();
/// assert_eq!(kind, PartKind::EventId);
/// assert_eq!(PartKind::from_tag(kind.tag()), Some(kind));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    Object,
    Int,
    Region,
    EventId,
    Bool,
}

impl PartKind {
    pub const ALL: [PartKind; 5] = [
        PartKind::Object,
        PartKind::Int,
        PartKind::Region,
        PartKind::EventId,
        PartKind::Bool,
    ];

    pub fn tag(self) -> u8 {
        match self {
            PartKind::Object => 0,
            PartKind::Int => 1,
            PartKind::Region => 2,
            PartKind::EventId => 3,
            PartKind::Bool => 4,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn name(self) -> &'static str {
        match self {
            PartKind::Object => "object",
            PartKind::Int => "int",
            PartKind::Region => "region",
            PartKind::EventId => "event-id",
            PartKind::Bool => "bool",
        }
    }

    /// Smallest number of bytes a part of this kind can occupy.
    pub fn min_len(self) -> usize {
        match self {
            PartKind::Object | PartKind::Region => layout::HEADER_LEN,
            PartKind::Int => layout::HEADER_LEN + layout::INT_VALUE_LEN,
            PartKind::EventId => layout::EVENT_ID_PART_LEN,
            PartKind::Bool => layout::HEADER_LEN + layout::BOOL_VALUE_LEN,
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartKind {
    type Err = UnknownPartKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "object" | "obj" => Ok(PartKind::Object),
            "int" | "integer" => Ok(PartKind::Int),
            "region" => Ok(PartKind::Region),
            "event-id" | "event_id" | "eventid" => Ok(PartKind::EventId),
            "bool" | "boolean" => Ok(PartKind::Bool),
            _ => Err(UnknownPartKind(value.to_string())),
        }
    }
}
