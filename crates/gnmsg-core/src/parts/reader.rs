use super::error::PartError;
use super::layout;
use super::record::PartHeader;
use crate::wire::{WireCursor, int_to_hex_string};

/// Part-level conventions layered over a [`WireCursor`].
///
/// Knows the shared `Size`/`IsObject` header, how declared sizes map to byte
/// counts, and how integer and boolean values are rendered.
pub struct PartReader<'c, 'a> {
    cursor: &'c mut WireCursor<'a>,
}

impl<'c, 'a> PartReader<'c, 'a> {
    pub fn new(cursor: &'c mut WireCursor<'a>) -> Self {
        Self { cursor }
    }

    pub fn read_header(&mut self) -> Result<PartHeader, PartError> {
        let size = self.cursor.read_i32(layout::FIELD_SIZE)?;
        let is_object = self.cursor.read_u8(layout::FIELD_IS_OBJECT)?;
        Ok(PartHeader { size, is_object })
    }

    pub fn read_byte(&mut self, field: &'static str) -> Result<u8, PartError> {
        Ok(self.cursor.read_u8(field)?)
    }

    pub fn read_long(&mut self, field: &'static str) -> Result<i64, PartError> {
        Ok(self.cursor.read_i64(field)?)
    }

    pub fn read_hex_int(&mut self, field: &'static str) -> Result<String, PartError> {
        let value = self.cursor.read_i32(field)?;
        Ok(int_to_hex_string(value))
    }

    /// Zero is `"False"`, any other byte is `"True"`.
    pub fn read_flag(&mut self, field: &'static str) -> Result<String, PartError> {
        let value = self.cursor.read_u8(field)?;
        let text = if value == 0 {
            layout::BOOL_FALSE
        } else {
            layout::BOOL_TRUE
        };
        Ok(text.to_string())
    }

    pub fn read_sized_string(
        &mut self,
        field: &'static str,
        size: i32,
        unit_width: usize,
    ) -> Result<String, PartError> {
        let len = payload_len(field, size, unit_width)?;
        Ok(self.cursor.read_string(field, len)?)
    }

    pub fn skip_sized_payload(
        &mut self,
        field: &'static str,
        size: i32,
        unit_width: usize,
    ) -> Result<(), PartError> {
        let len = payload_len(field, size, unit_width)?;
        Ok(self.cursor.skip(field, len)?)
    }
}

/// Convert a declared `Size` into a byte count.
///
/// Negative sizes cannot address the buffer and are rejected here; oversized
/// ones are left for the bounds check of the actual read.
pub fn payload_len(field: &'static str, size: i32, unit_width: usize) -> Result<usize, PartError> {
    usize::try_from(size)
        .ok()
        .and_then(|units| units.checked_mul(unit_width))
        .ok_or(PartError::InvalidLength {
            field,
            length: i64::from(size),
        })
}

#[cfg(test)]
mod tests {
    use super::{PartReader, payload_len};
    use crate::parts::error::PartError;
    use crate::parts::layout;
    use crate::wire::WireCursor;

    #[test]
    fn header_reads_size_then_flag() {
        let bytes = [0x00, 0x00, 0x01, 0x00, 0x01];
        let mut cursor = WireCursor::new(&bytes);
        let header = PartReader::new(&mut cursor).read_header().unwrap();
        assert_eq!(header.size, 256);
        assert_eq!(header.is_object, 1);
        assert_eq!(cursor.position(), layout::HEADER_LEN);
    }

    #[test]
    fn flag_maps_any_nonzero_to_true() {
        let bytes = [0x00, 0x01, 0x02, 0x80, 0xff];
        let mut cursor = WireCursor::new(&bytes);
        let mut reader = PartReader::new(&mut cursor);
        assert_eq!(reader.read_flag("Value").unwrap(), "False");
        for _ in 1..bytes.len() {
            assert_eq!(reader.read_flag("Value").unwrap(), "True");
        }
    }

    #[test]
    fn payload_len_scales_by_unit_width() {
        assert_eq!(payload_len("p", 3, 2).unwrap(), 6);
        assert_eq!(payload_len("p", 0, 2).unwrap(), 0);
    }

    #[test]
    fn payload_len_rejects_negative_size() {
        let err = payload_len("Name", -4, 1).unwrap_err();
        assert_eq!(
            err,
            PartError::InvalidLength {
                field: "Name",
                length: -4
            }
        );
    }

    #[test]
    fn oversized_payload_is_a_bounds_failure() {
        let bytes = [0u8; 4];
        let mut cursor = WireCursor::new(&bytes);
        let err = PartReader::new(&mut cursor)
            .skip_sized_payload("ObjectPayload", i32::MAX, 2)
            .unwrap_err();
        assert!(matches!(err, PartError::Wire(_)));
        assert_eq!(cursor.position(), 0);
    }
}
