/// Format a 32-bit integer the way part values are reported.
///
/// Lowercase, no `0x` prefix, no zero padding. Negative values are rendered
/// as their 32-bit two's complement.
///
/// # Examples
/// ```
/// use gnmsg_core::wire::int_to_hex_string;
///
/// assert_eq!(int_to_hex_string(42), "2a");
/// assert_eq!(int_to_hex_string(-1), "ffffffff");
/// ```
pub fn int_to_hex_string(value: i32) -> String {
    format!("{:x}", value)
}

/// Decode a textual hex dump into bytes.
///
/// Whitespace between digits is ignored and a leading `0x`/`0X` is accepted.
///
/// # Examples
/// ```
/// use gnmsg_core::wire::decode_hex_bytes;
///
/// let bytes = decode_hex_bytes("0x00 00 00 2A").unwrap();
/// assert_eq!(bytes, vec![0, 0, 0, 0x2a]);
/// ```
///
/// # Errors
/// Returns `hex::FromHexError` for odd digit counts or non-hex characters.
pub fn decode_hex_bytes(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits)
}
