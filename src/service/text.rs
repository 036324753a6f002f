//! Text helpers for author-supplied embed content.
//!
//! Slash command inputs are single-line, so authors type `\n` to mean a line break.
//! These helpers turn those literal escapes into real control characters and cut
//! text down to Discord's embed limits.

/// Maximum length of an embed title.
pub const TITLE_LIMIT: usize = 256;
/// Maximum length of an embed description.
pub const BODY_LIMIT: usize = 4096;
/// Maximum length of an embed footer.
pub const FOOTER_LIMIT: usize = 2048;
/// Maximum length of a button label.
pub const BUTTON_LABEL_LIMIT: usize = 80;

/// Converts typed escape sequences into real line breaks and tabs, then trims.
///
/// Literal `\r\n`, `\n` and `\r` become a line break and literal `\t` becomes a
/// tab. `\r\n` is replaced first so it yields a single line break. Applying the
/// function twice gives the same result as applying it once.
///
/// # Returns
/// - `None` - Input was absent
/// - `Some(String)` - Normalized and trimmed text (possibly empty)
pub fn normalize(input: Option<&str>) -> Option<String> {
    input.map(|s| {
        s.replace("\\r\\n", "\n")
            .replace("\\n", "\n")
            .replace("\\r", "\n")
            .replace("\\t", "\t")
            .trim()
            .to_string()
    })
}

/// Cuts `input` to at most `max_chars` characters.
///
/// This is a hard cut, not word-aware. Characters are Unicode scalar values so a
/// multi-byte character is never split.
pub fn truncate(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => input[..byte_index].to_string(),
        None => input.to_string(),
    }
}
