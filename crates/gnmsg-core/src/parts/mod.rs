//! Part decoding.
//!
//! Follows the same layering as the rest of the crate:
//! - `layout`: field widths, unit widths and field names (source of truth)
//! - `reader`: part conventions over a `WireCursor` (header, hex ints, flags)
//! - `parser`: one decoder per part kind, plus kind-based dispatch
//! - `record`: the fixed-shape records the decoders return
//! - `error`: explicit, actionable errors
//!
//! Decoders are pure: a failed decode leaves the cursor where the part began.

pub mod error;
pub mod kind;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod record;

pub use error::{PartError, UnknownPartKind};
pub use kind::PartKind;
pub use parser::{
    decode_part, decode_part_at, read_event_id_part, read_int_part, read_object_header,
    read_object_part, read_raw_boolean_part, read_region_part,
};
pub use record::{BooleanPart, EventIdPart, IntPart, ObjectPart, Part, PartHeader, RegionPart};
