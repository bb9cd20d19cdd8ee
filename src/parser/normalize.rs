//! Line normalization.
//!
//! WhatsApp exports pepper lines with Unicode directional marks around
//! timestamps and phone numbers. These carry no content and would break the
//! header regex, so every physical line is scrubbed and trimmed before it
//! reaches the entry matcher.

/// Check if a character is a directional formatting mark.
///
/// Covers LRM/RLM (U+200E, U+200F) and the embedding/override block
/// (U+202A through U+202E).
#[inline]
fn is_directional_mark(c: char) -> bool {
    matches!(c, '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}')
}

/// Strip directional marks and surrounding whitespace from a raw line.
///
/// The result may be empty; empty lines carry no boundary or content signal
/// and are discarded by the caller.
#[must_use]
pub fn normalize_line(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !is_directional_mark(*c)).collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_lrm_and_rlm() {
        assert_eq!(normalize_line("\u{200e}hello\u{200f}"), "hello");
    }

    #[test]
    fn test_strips_embedding_and_override_marks() {
        assert_eq!(
            normalize_line("\u{202a}1/2/23, 10:00\u{202c} - Alice: hi"),
            "1/2/23, 10:00 - Alice: hi"
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_line("  hi there  "), "hi there");
    }

    #[test]
    fn test_marks_only_line_becomes_empty() {
        assert_eq!(normalize_line(" \u{200e}\u{202d} "), "");
    }

    #[test]
    fn test_interior_marks_removed() {
        assert_eq!(normalize_line("a\u{200e}b"), "ab");
    }
}
