use super::error::WireError;

const INT_LEN: usize = 4;
const LONG_LEN: usize = 8;

/// Forward-only cursor over a message buffer.
///
/// Reads either succeed and advance by exactly the width of the field, or
/// fail and leave the position untouched.
///
/// # Examples
/// ```
/// use gnmsg_core::wire::WireCursor;
///
/// let bytes = [0x00, 0x00, 0x00, 0x2a, 0x01];
/// let mut cursor = WireCursor::new(&bytes);
/// assert_eq!(cursor.read_i32("Value").unwrap(), 42);
/// assert_eq!(cursor.read_u8("Flag").unwrap(), 1);
/// assert_eq!(cursor.position(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct WireCursor<'a> {
    payload: &'a [u8],
    position: usize,
}

impl<'a> WireCursor<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self::at(payload, 0)
    }

    /// Start reading at `position`. Positions past the end are allowed; the
    /// first read reports the underflow.
    pub fn at(payload: &'a [u8], position: usize) -> Self {
        Self { payload, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.payload.len().saturating_sub(self.position)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn require(&self, field: &'static str, needed: usize) -> Result<(), WireError> {
        let actual = self.remaining();
        if actual < needed {
            return Err(WireError::TooShort {
                field,
                offset: self.position,
                needed,
                actual,
            });
        }
        Ok(())
    }

    pub fn peek_u8(&self, field: &'static str) -> Result<u8, WireError> {
        self.require(field, 1)?;
        self.payload
            .get(self.position)
            .copied()
            .ok_or(WireError::TooShort {
                field,
                offset: self.position,
                needed: 1,
                actual: 0,
            })
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, WireError> {
        let value = self.peek_u8(field)?;
        self.position += 1;
        Ok(value)
    }

    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, WireError> {
        self.read_array::<INT_LEN>(field).map(i32::from_be_bytes)
    }

    pub fn read_i64(&mut self, field: &'static str) -> Result<i64, WireError> {
        self.read_array::<LONG_LEN>(field).map(i64::from_be_bytes)
    }

    pub fn read_slice(&mut self, field: &'static str, len: usize) -> Result<&'a [u8], WireError> {
        self.require(field, len)?;
        let end = self.position + len;
        let bytes = self
            .payload
            .get(self.position..end)
            .ok_or(WireError::TooShort {
                field,
                offset: self.position,
                needed: len,
                actual: 0,
            })?;
        self.position = end;
        Ok(bytes)
    }

    /// Read `len` bytes as UTF-8, replacing invalid sequences.
    pub fn read_string(&mut self, field: &'static str, len: usize) -> Result<String, WireError> {
        let bytes = self.read_slice(field, len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn skip(&mut self, field: &'static str, len: usize) -> Result<(), WireError> {
        self.read_slice(field, len).map(|_| ())
    }

    /// Move back to a position previously returned by [`position`](Self::position).
    ///
    /// Used to discard a partially decoded record; never moves forward.
    pub(crate) fn rewind_to(&mut self, position: usize) {
        debug_assert!(position <= self.position);
        self.position = self.position.min(position);
    }

    fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], WireError> {
        let bytes = self.read_slice(field, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}

/// Run `read` against `payload` starting at `offset` and return the value
/// with the offset that follows it.
///
/// This is the uniform `(buffer, offset) -> (value, next_offset)` adapter
/// over any cursor-based reader, including the part decoders.
///
/// # Examples
/// ```
/// use gnmsg_core::wire::{WireCursor, read_at};
///
/// let bytes = [0xff, 0x00, 0x00, 0x00, 0x07];
/// let (value, next) = read_at(&bytes, 1, |c: &mut WireCursor<'_>| c.read_i32("Value")).unwrap();
/// assert_eq!((value, next), (7, 5));
/// ```
pub fn read_at<'a, T, E>(
    payload: &'a [u8],
    offset: usize,
    read: impl FnOnce(&mut WireCursor<'a>) -> Result<T, E>,
) -> Result<(T, usize), E> {
    let mut cursor = WireCursor::at(payload, offset);
    let value = read(&mut cursor)?;
    Ok((value, cursor.position()))
}

pub fn read_int_value(payload: &[u8], offset: usize) -> Result<(i32, usize), WireError> {
    read_at(payload, offset, |c| c.read_i32("int"))
}

pub fn read_byte_value(payload: &[u8], offset: usize) -> Result<(u8, usize), WireError> {
    read_at(payload, offset, |c| c.read_u8("byte"))
}

pub fn read_long_value(payload: &[u8], offset: usize) -> Result<(i64, usize), WireError> {
    read_at(payload, offset, |c| c.read_i64("long"))
}

pub fn read_string_value(
    payload: &[u8],
    length: usize,
    offset: usize,
) -> Result<(String, usize), WireError> {
    read_at(payload, offset, |c| c.read_string("string", length))
}
