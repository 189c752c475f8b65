const COMMENT_MARKER: char = '#';
const LABEL_SEPARATOR: char = ':';

/// Extract the hex payload from one line of a dump.
///
/// Returns `None` for blank and comment-only lines.
pub fn payload_text(line: &str) -> Option<&str> {
    let content = match line.find(COMMENT_MARKER) {
        Some(index) => &line[..index],
        None => line,
    };
    let content = match content.rfind(LABEL_SEPARATOR) {
        Some(index) => &content[index + LABEL_SEPARATOR.len_utf8()..],
        None => content,
    };
    let content = content.trim();
    if content.is_empty() { None } else { Some(content) }
}
