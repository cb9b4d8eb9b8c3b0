/// Pure text helpers shared by the generation pipeline.
///
/// No I/O here; everything takes a string and returns a string.

/// Keep the first `max_chars` characters of `text`, appending "..." only when
/// something was cut off.
///
/// Counts `char`s rather than bytes so multi-byte text never splits mid-character.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Strip leading markdown heading markers (`#`, `##`, ...) and surrounding whitespace.
pub fn strip_heading_markup(line: &str) -> &str {
    line.trim().trim_start_matches('#').trim()
}

pub fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
