pub const SIZE_LEN: usize = 4;
pub const IS_OBJECT_LEN: usize = 1;
pub const HEADER_LEN: usize = SIZE_LEN + IS_OBJECT_LEN;

pub const INT_VALUE_LEN: usize = 4;
pub const LONG_CODE_LEN: usize = 1;
pub const LONG_VALUE_LEN: usize = 8;
pub const BOOL_VALUE_LEN: usize = 1;

pub const EVENT_ID_BODY_LEN: usize = 2 * (LONG_CODE_LEN + LONG_VALUE_LEN);
pub const EVENT_ID_PART_LEN: usize = HEADER_LEN + EVENT_ID_BODY_LEN;

/// Bytes per declared `Size` unit of an object payload.
pub const OBJECT_PAYLOAD_UNIT_WIDTH: usize = 2;
/// Bytes per declared `Size` unit of a region name.
pub const REGION_NAME_UNIT_WIDTH: usize = 1;

pub const FIELD_SIZE: &str = "Size";
pub const FIELD_IS_OBJECT: &str = "IsObject";
pub const FIELD_VALUE: &str = "Value";
pub const FIELD_NAME: &str = "Name";
pub const FIELD_OBJECT_PAYLOAD: &str = "ObjectPayload";
pub const FIELD_LONG_CODE_1: &str = "LongCode1";
pub const FIELD_EVENT_ID_THREAD: &str = "EventIdThread";
pub const FIELD_LONG_CODE_2: &str = "LongCode2";
pub const FIELD_EVENT_ID_SEQUENCE: &str = "EventIdSequence";

pub const BOOL_FALSE: &str = "False";
pub const BOOL_TRUE: &str = "True";
