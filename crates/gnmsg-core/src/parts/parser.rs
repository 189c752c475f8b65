use super::error::PartError;
use super::kind::PartKind;
use super::layout;
use super::reader::PartReader;
use super::record::{
    BooleanPart, EventIdPart, IntPart, ObjectPart, Part, PartHeader, RegionPart,
};
use crate::wire::{WireCursor, read_at};

/// Decode the shared `Size`/`IsObject` header.
pub fn read_object_header(cursor: &mut WireCursor<'_>) -> Result<PartHeader, PartError> {
    atomically(cursor, |reader| reader.read_header())
}

/// Decode an object part and step over its `2 * Size` byte payload.
pub fn read_object_part(cursor: &mut WireCursor<'_>) -> Result<ObjectPart, PartError> {
    atomically(cursor, |reader| {
        let header = reader.read_header()?;
        reader.skip_sized_payload(
            layout::FIELD_OBJECT_PAYLOAD,
            header.size,
            layout::OBJECT_PAYLOAD_UNIT_WIDTH,
        )?;
        Ok(ObjectPart { header })
    })
}

pub fn read_int_part(cursor: &mut WireCursor<'_>) -> Result<IntPart, PartError> {
    atomically(cursor, |reader| {
        let header = reader.read_header()?;
        let value = reader.read_hex_int(layout::FIELD_VALUE)?;
        Ok(IntPart { header, value })
    })
}

/// Decode a region part; the name is `Size` bytes long.
pub fn read_region_part(cursor: &mut WireCursor<'_>) -> Result<RegionPart, PartError> {
    atomically(cursor, |reader| {
        let header = reader.read_header()?;
        let name = reader.read_sized_string(
            layout::FIELD_NAME,
            header.size,
            layout::REGION_NAME_UNIT_WIDTH,
        )?;
        Ok(RegionPart { header, name })
    })
}

pub fn read_event_id_part(cursor: &mut WireCursor<'_>) -> Result<EventIdPart, PartError> {
    atomically(cursor, |reader| {
        let header = reader.read_header()?;
        let long_code_1 = reader.read_byte(layout::FIELD_LONG_CODE_1)?;
        let event_id_thread = reader.read_long(layout::FIELD_EVENT_ID_THREAD)?;
        let long_code_2 = reader.read_byte(layout::FIELD_LONG_CODE_2)?;
        let event_id_sequence = reader.read_long(layout::FIELD_EVENT_ID_SEQUENCE)?;
        Ok(EventIdPart {
            header,
            long_code_1,
            event_id_thread,
            long_code_2,
            event_id_sequence,
        })
    })
}

pub fn read_raw_boolean_part(cursor: &mut WireCursor<'_>) -> Result<BooleanPart, PartError> {
    atomically(cursor, |reader| {
        let header = reader.read_header()?;
        let value = reader.read_flag(layout::FIELD_VALUE)?;
        Ok(BooleanPart { header, value })
    })
}

/// Decode one part of the given kind at the cursor.
pub fn decode_part(kind: PartKind, cursor: &mut WireCursor<'_>) -> Result<Part, PartError> {
    match kind {
        PartKind::Object => read_object_part(cursor).map(Part::Object),
        PartKind::Int => read_int_part(cursor).map(Part::Int),
        PartKind::Region => read_region_part(cursor).map(Part::Region),
        PartKind::EventId => read_event_id_part(cursor).map(Part::EventId),
        PartKind::Bool => read_raw_boolean_part(cursor).map(Part::Bool),
    }
}

/// Decode one part at `offset`, returning the part and the offset after it.
///
/// # Examples
/// ```
/// use gnmsg_core::parts::{Part, PartKind, decode_part_at};
///
/// let bytes = [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x2a];
/// let (part, next) = decode_part_at(PartKind::Int, &bytes, 0).unwrap();
/// let Part::Int(int) = part else { panic!("expected int part") };
/// assert_eq!(int.value, "2a");
/// assert_eq!(next, 9);
/// ```
pub fn decode_part_at(
    kind: PartKind,
    payload: &[u8],
    offset: usize,
) -> Result<(Part, usize), PartError> {
    read_at(payload, offset, |cursor| decode_part(kind, cursor))
}

fn atomically<'a, T>(
    cursor: &mut WireCursor<'a>,
    decode: impl FnOnce(&mut PartReader<'_, 'a>) -> Result<T, PartError>,
) -> Result<T, PartError> {
    let start = cursor.position();
    let result = decode(&mut PartReader::new(cursor));
    if result.is_err() {
        cursor.rewind_to(start);
    }
    result
}
