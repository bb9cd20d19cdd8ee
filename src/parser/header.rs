//! Entry matching: recognizing the timestamp header that opens a transcript
//! entry.
//!
//! The recognized grammar, informally:
//!
//! ```text
//! entry     := ["["] date sep time ["]"] headsep remainder
//! date      := digit{1,2} dsep digit{1,2} dsep digit{2,4}
//! dsep      := "/" | "-" | "."
//! time      := digit{1,2} ":" digit{2} [":" digit{2}] [ws] [ampm]
//! ampm      := "AM" | "PM"   (case-insensitive)
//! headsep   := " - " | [" "]
//! remainder := rest of line
//! ```
//!
//! Lines that do not match are continuations of the open entry (or dropped
//! when no entry is open). The remainder captures everything after the
//! separator verbatim, further colons included.

use once_cell::sync::Lazy;
use regex::Regex;

/// Header pattern for one transcript entry.
///
/// Known ambiguity, preserved for compatibility with existing exports: the
/// separator prefers `" - "` but falls back to a single optional space, so a
/// message whose content legitimately begins with `"- "` loses that dash into
/// the separator.
static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\[?(\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}),?\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\]?(?:\s+-\s+|\s?)(.+)",
    )
    .expect("header regex is valid")
});

/// Seconds component of a time token (`H:MM:SS` -> `H:MM`).
static SECONDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}:\d{2}):\d{2}").expect("seconds regex is valid"));

/// A recognized entry header with its raw trailing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeader {
    /// Normalized date (`D/M/YYYY`-shaped).
    pub date: String,
    /// Normalized time (seconds stripped).
    pub time: String,
    /// Everything after the header separator, verbatim.
    pub remainder: String,
}

/// Try to match a normalized line as the start of a new transcript entry.
///
/// Returns `None` for continuation lines.
#[must_use]
pub fn match_header(line: &str) -> Option<EntryHeader> {
    let caps = HEADER_RE.captures(line)?;
    Some(EntryHeader {
        date: normalize_date(&caps[1]),
        time: normalize_time(&caps[2]),
        remainder: caps[3].to_string(),
    })
}

/// Normalize a date token to `D/M/YYYY` shape.
///
/// Two-digit years are expanded with a `20` prefix; the original separator
/// (`/`, `-`, or `.`) is rewritten to `/`. Day-first vs month-first is not
/// resolvable from a single token and is passed through as written.
#[must_use]
pub fn normalize_date(date: &str) -> String {
    let parts: Vec<&str> = date.split(['/', '-', '.']).collect();
    if let [day, month, year] = parts[..] {
        let year = if year.len() == 2 {
            format!("20{year}")
        } else {
            year.to_string()
        };
        format!("{day}/{month}/{year}")
    } else {
        date.to_string()
    }
}

/// Normalize a time token: trim and strip any seconds component, keeping an
/// AM/PM suffix intact.
#[must_use]
pub fn normalize_time(time: &str) -> String {
    SECONDS_RE.replace(time.trim(), "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1/2/23, 10:00 - Alice: hi", "1/2/2023", "10:00", "Alice: hi")]
    #[case("01/02/2023, 9:05 - Bob: hey", "01/02/2023", "9:05", "Bob: hey")]
    #[case("3-4-21, 23:59 - note", "3/4/2021", "23:59", "note")]
    #[case("3.4.21, 7:01 - note", "3/4/2021", "7:01", "note")]
    #[case("[1/2/23, 10:00:30] Alice: hi", "1/2/2023", "10:00", "Alice: hi")]
    #[case("1/2/23, 10:00 PM - Alice: hi", "1/2/2023", "10:00 PM", "Alice: hi")]
    #[case("1/2/23, 10:00pm - Alice: hi", "1/2/2023", "10:00pm", "Alice: hi")]
    fn test_header_variants(
        #[case] line: &str,
        #[case] date: &str,
        #[case] time: &str,
        #[case] remainder: &str,
    ) {
        let header = match_header(line).expect("line should match");
        assert_eq!(header.date, date);
        assert_eq!(header.time, time);
        assert_eq!(header.remainder, remainder);
    }

    #[test]
    fn test_remainder_keeps_trailing_colons() {
        let header = match_header("1/2/23, 10:00 - Alice: note: see 5:30").unwrap();
        assert_eq!(header.remainder, "Alice: note: see 5:30");
    }

    #[test]
    fn test_no_header_is_continuation() {
        assert!(match_header("just a continuation line").is_none());
        assert!(match_header("").is_none());
    }

    #[test]
    fn test_four_digit_year_passes_through() {
        assert_eq!(normalize_date("25/12/2019"), "25/12/2019");
    }

    #[test]
    fn test_two_digit_year_expanded() {
        assert_eq!(normalize_date("1/2/23"), "1/2/2023");
    }

    #[test]
    fn test_time_seconds_stripped_before_ampm() {
        assert_eq!(normalize_time("10:00:45 PM"), "10:00 PM");
        assert_eq!(normalize_time("10:00"), "10:00");
    }

    // Known separator ambiguity: without " - ", a single space separates the
    // header from the remainder, so content starting with "- " loses the dash.
    #[test]
    fn test_leading_dash_consumed_by_separator() {
        let header = match_header("1/2/23, 10:00 - - dashed message").unwrap();
        assert_eq!(header.remainder, "- dashed message");

        let header = match_header("1/2/23, 10:00 - dashed").unwrap();
        assert_eq!(header.remainder, "dashed");
    }
}
