//! Hex and date fast paths.
//!
//! Before falling back to token-by-token comparison, two cheap heuristics
//! get a chance to order a pair outright:
//!
//! - both values are whole hexadecimal literals (`0x1f`), compared as integers
//! - both values are timestamps, compared as milliseconds since the epoch
//!
//! Either heuristic declines silently when its pattern does not match.
//!
//! # Date formats
//!
//! Only fixed formats are recognized, never a locale-dependent guess. Naive
//! forms are read as UTC.
//!
//! | Shape | Example |
//! |-------|---------|
//! | RFC 3339 | `2024-01-29T10:00:00+02:00` |
//! | RFC 2822 | `Mon, 29 Jan 2024 10:00:00 +0000` |
//! | ISO date, optional time | `2024-01-29`, `2024-01-29 10:00`, `2024-01-29T10:00:00.250` |
//! | Slashed date, optional time | `2024/01/29`, `2024/1/29 10:00:00` |
//! | Long form | `Monday, January 29, 2024` |
//!
//! A value must also have one of the date shapes the comparator looks for
//! (clock time, `d-d-d` / `d/d/d`, or `Weekday, Month D, YYYY`) to count as
//! a date.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::fold_radix;

static HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]+$").expect("hex pattern is valid"));

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:[0-9A-Za-z_ ]+,?[0-9A-Za-z_ ]+)?[0-9A-Za-z_ ]+,?[0-9A-Za-z_ ]+[0-9]+:[0-9]+(?::[0-9]+)?[0-9A-Za-z_ ]?",
        r"|^[0-9]{1,4}[/\-][0-9]{1,4}[/\-][0-9]{1,4}",
        r"|^[0-9A-Za-z_]+, [0-9A-Za-z_]+ [0-9]+, [0-9]{4}",
    ))
    .expect("date shape pattern is valid")
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%A, %B %d, %Y"];

/// Parses a whole-string hexadecimal literal (`0x` or `0X` prefix).
///
/// Digits are folded into an `f64`, so literals wider than 64 bits lose
/// precision instead of overflowing.
///
/// ```
/// use natsort::parse_hex;
///
/// assert_eq!(parse_hex("0x1F"), Some(31.0));
/// assert_eq!(parse_hex("0x"), None);
/// assert_eq!(parse_hex("0x1g"), None);
/// ```
pub fn parse_hex(text: &str) -> Option<f64> {
    if !HEX.is_match(text) {
        return None;
    }
    fold_radix(&text[2..], 16)
}

/// Returns `true` if the text has one of the recognized date shapes.
pub fn looks_like_date(text: &str) -> bool {
    DATE_SHAPE.is_match(text)
}

/// Parses a timestamp in one of the fixed formats, returning milliseconds
/// since the Unix epoch.
///
/// Case does not matter, so case-folded input parses too.
///
/// ```
/// use natsort::parse_timestamp;
///
/// assert_eq!(parse_timestamp("1970-01-02"), Some(86_400_000));
/// assert_eq!(parse_timestamp("1970-01-01t00:00:01z"), Some(1_000));
/// assert_eq!(parse_timestamp("01/02/03"), None);
/// assert_eq!(parse_timestamp("yesterday"), None);
/// ```
pub fn parse_timestamp(text: &str) -> Option<i64> {
    if !looks_like_date(text) {
        return None;
    }
    let text = text.to_ascii_uppercase();

    if let Ok(dt) = DateTime::parse_from_rfc3339(&text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(&text) {
        return Some(dt.timestamp_millis());
    }
    if has_leading_year(&text) {
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&text, format) {
                return Some(dt.and_utc().timestamp_millis());
            }
        }
    }
    for format in DATE_FORMATS {
        if format.starts_with("%Y") && !has_leading_year(&text) {
            continue;
        }
        if let Ok(date) = NaiveDate::parse_from_str(&text, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }
    None
}

/// Numeric dates must lead with a four-digit year; `1/2/3` is never guessed at.
fn has_leading_year(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() > 4
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && matches!(bytes[4], b'-' | b'/')
}

/// A fast-path decision: the pair of keys that orders two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FastPath {
    /// Both values are hexadecimal literals.
    Hex(f64, f64),
    /// Both values are timestamps, in milliseconds.
    Date(i64, i64),
}

impl FastPath {
    /// Tries both fast paths on a pair of normalized values.
    ///
    /// The hex path needs both values to be whole hex literals. The date
    /// path only considers `a` when it has more than one token, and only
    /// parses `b` once `a` is a date and `b` has a date shape.
    pub fn detect(a: &str, a_token_count: usize, b: &str) -> Option<FastPath> {
        if let (Some(x), Some(y)) = (parse_hex(a), parse_hex(b)) {
            tracing::trace!(a, b, "hex fast path");
            return Some(FastPath::Hex(x, y));
        }

        if a_token_count == 1 {
            return None;
        }
        let x = parse_timestamp(a)?;
        if !looks_like_date(b) {
            return None;
        }
        let y = parse_timestamp(b)?;
        tracing::trace!(a, b, "date fast path");
        Some(FastPath::Date(x, y))
    }

    /// Ascending ordering of the two keys.
    pub fn ordering(self) -> Ordering {
        match self {
            FastPath::Hex(x, y) => x.total_cmp(&y),
            FastPath::Date(x, y) => x.cmp(&y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literals() {
        assert_eq!(parse_hex("0x1f"), Some(31.0));
        assert_eq!(parse_hex("0XFF"), Some(255.0));
        assert_eq!(parse_hex("0x0"), Some(0.0));
        assert_eq!(parse_hex(" 0x1"), None);
        assert_eq!(parse_hex("1f"), None);
    }

    #[test]
    fn wide_hex_degrades_to_float() {
        let wide = parse_hex("0x1ffffffffffffffffffff").unwrap();
        assert!(wide > u64::MAX as f64);
    }

    #[test]
    fn date_shapes() {
        assert!(looks_like_date("2024-01-29"));
        assert!(looks_like_date("1/2/2024"));
        assert!(looks_like_date("mon, 29 jan 2024 10:00:00 +0000"));
        assert!(looks_like_date("monday, january 29, 2024"));
        assert!(!looks_like_date("img12.png"));
        assert!(!looks_like_date("january 29 2024"));
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_timestamp("1970-01-01"), Some(0));
        assert_eq!(parse_timestamp("1970-01-01 00:01"), Some(60_000));
        assert_eq!(parse_timestamp("1970-01-01t00:00:00.5"), Some(500));
        assert_eq!(parse_timestamp("1970/01/02"), Some(86_400_000));
    }

    #[test]
    fn rfc3339_offsets() {
        assert_eq!(parse_timestamp("1970-01-01t01:00:00+01:00"), Some(0));
    }

    #[test]
    fn rfc2822_dates() {
        assert_eq!(
            parse_timestamp("thu, 01 jan 1970 00:00:10 +0000"),
            Some(10_000)
        );
    }

    #[test]
    fn long_form_dates() {
        assert_eq!(
            parse_timestamp("friday, january 2, 1970"),
            Some(86_400_000)
        );
    }

    #[test]
    fn invalid_dates_decline() {
        assert_eq!(parse_timestamp("2024-02-30"), None);
        assert_eq!(parse_timestamp("1/2/3"), None);
        assert_eq!(parse_timestamp("01-02-2024"), None);
        assert_eq!(parse_timestamp("12:30"), None);
        assert_eq!(parse_timestamp("file 10:30"), None);
    }

    #[test]
    fn detect_hex_pair() {
        assert_eq!(
            FastPath::detect("0x1f", 1, "0x20"),
            Some(FastPath::Hex(31.0, 32.0))
        );
        assert_eq!(FastPath::detect("0x1f", 1, "x20"), None);
    }

    #[test]
    fn detect_date_pair() {
        let detected = FastPath::detect("2024-01-29", 5, "2024-01-30");
        assert!(matches!(detected, Some(FastPath::Date(a, b)) if a < b));
    }

    #[test]
    fn detect_requires_multiple_tokens_on_left() {
        assert_eq!(FastPath::detect("2024-01-29", 1, "2024-01-30"), None);
    }

    #[test]
    fn detect_requires_date_shape_on_right() {
        assert_eq!(FastPath::detect("2024-01-29", 5, "build 7"), None);
    }

    #[test]
    fn fast_path_ordering() {
        assert_eq!(FastPath::Hex(1.0, 2.0).ordering(), Ordering::Less);
        assert_eq!(FastPath::Date(5, 5).ordering(), Ordering::Equal);
        assert_eq!(FastPath::Date(6, 5).ordering(), Ordering::Greater);
    }
}
