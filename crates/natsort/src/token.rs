//! Tokenizing and per-token parsing.
//!
//! A normalized value is split at numeric literals into an alternating
//! sequence of text and numeric runs. Each token is then parsed into a
//! [`Key`], the tagged union the comparator actually compares.
//!
//! Number recognition follows JavaScript host semantics (`parseFloat`
//! and `Number(text)`), since those decide what counts as "not a number".

use std::borrow::Cow;
use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::format_f64;

/// Numeric literals, in priority order: hex, a signed decimal at the very
/// start of the text, plain digit runs.
static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"0x[0-9a-fA-F]+|^[+\-]?[0-9]+(?:\.[0-9]*)?(?:[eE][+\-]?[0-9]+)?|[0-9]+")
        .expect("numeric literal pattern is valid")
});

const SEPARATOR: char = '\0';

/// Splits text into alternating non-numeric and numeric tokens.
///
/// An empty token at either end is dropped. Empty input yields a single
/// empty token.
///
/// # Example
///
/// ```
/// use natsort::tokenize;
///
/// assert_eq!(tokenize("img12.png"), vec!["img", "12", ".png"]);
/// assert_eq!(tokenize("-1.5e3 apples"), vec!["-1.5e3", " apples"]);
/// assert_eq!(tokenize("plain"), vec!["plain"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in NUMERIC.find_iter(text) {
        tokens.extend(text[last..m.start()].split(SEPARATOR));
        tokens.push(m.as_str());
        last = m.end();
    }
    tokens.extend(text[last..].split(SEPARATOR));

    if tokens.len() > 1 && tokens.last() == Some(&"") {
        tokens.pop();
    }
    if tokens.len() > 1 && tokens.first() == Some(&"") {
        tokens.remove(0);
    }
    tokens
}

/// The comparison key of a single token.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A token read as a nonzero number, or the zero placeholder for a
    /// blank token.
    Number(f64),
    /// A token kept as whitespace-collapsed text.
    Text(String),
}

impl Key {
    /// Parses a token belonging to a sequence of `token_count` tokens.
    ///
    /// The token is read as a number when it parses to a nonzero float and
    /// either does not start with `0` or is the only token. Otherwise it is
    /// kept as text with whitespace collapsed. Blank tokens become `0`.
    ///
    /// ```
    /// use natsort::Key;
    ///
    /// assert_eq!(Key::parse("10", 2), Key::Number(10.0));
    /// assert_eq!(Key::parse("007", 2), Key::Text("007".into()));
    /// assert_eq!(Key::parse("007", 1), Key::Number(7.0));
    /// assert_eq!(Key::parse("  ", 3), Key::Number(0.0));
    /// ```
    pub fn parse(token: &str, token_count: usize) -> Key {
        if !token.starts_with('0') || token_count == 1 {
            if let Some(n) = parse_float_prefix(token) {
                if n != 0.0 {
                    return Key::Number(n);
                }
            }
        }

        let collapsed = collapse_whitespace(token);
        if collapsed.is_empty() {
            Key::Number(0.0)
        } else {
            Key::Text(collapsed)
        }
    }

    /// The key coerced to a number. Text that is not a numeric literal is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Key::Number(n) => *n,
            Key::Text(s) => to_number(s),
        }
    }

    /// Returns `true` if the key does not coerce to a number.
    pub fn is_nan(&self) -> bool {
        self.to_number().is_nan()
    }

    /// The key's string form.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Key::Number(n) => Cow::Owned(format_f64(*n)),
            Key::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Relational comparison: lexical when both keys are text, numeric
    /// otherwise. Returns `None` when a numeric side is NaN.
    pub fn relate(&self, other: &Key) -> Option<Ordering> {
        match (self, other) {
            (Key::Text(a), Key::Text(b)) => Some(a.as_str().cmp(b.as_str())),
            _ => self.to_number().partial_cmp(&other.to_number()),
        }
    }
}

/// Whitespace as JavaScript's `\s` sees it.
pub(crate) fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trims leading and trailing whitespace.
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(is_js_whitespace)
}

fn collapse_whitespace(text: &str) -> String {
    text.split(is_js_whitespace)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses the longest leading decimal literal, like JavaScript's `parseFloat`.
///
/// Leading whitespace is skipped. Returns `None` when no literal is found.
///
/// ```
/// use natsort::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("12px"), Some(12.0));
/// assert_eq!(parse_float_prefix(" -1.5e2x"), Some(-150.0));
/// assert_eq!(parse_float_prefix("0x1f"), Some(0.0));
/// assert_eq!(parse_float_prefix(".png"), None);
/// ```
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(is_js_whitespace);
    if let Some(inf) = parse_infinity(text, false) {
        return Some(inf);
    }
    let len = decimal_prefix_len(text)?;
    text[..len].parse().ok()
}

/// Coerces a whole string to a number, like JavaScript's `Number(text)`.
///
/// Blank text is `0`. `0x`, `0o` and `0b` prefixed literals are read in
/// their radix. Anything that is not entirely a numeric literal is NaN.
///
/// ```
/// use natsort::to_number;
///
/// assert_eq!(to_number(" 007 "), 7.0);
/// assert_eq!(to_number("0x1f"), 31.0);
/// assert_eq!(to_number(""), 0.0);
/// assert!(to_number("12px").is_nan());
/// ```
pub fn to_number(text: &str) -> f64 {
    let text = trim(text);
    if text.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let upper = prefix.to_ascii_uppercase();
        if let Some(digits) = text
            .strip_prefix(prefix)
            .or_else(|| text.strip_prefix(upper.as_str()))
        {
            return fold_radix(digits, radix).unwrap_or(f64::NAN);
        }
    }

    if let Some(inf) = parse_infinity(text, true) {
        return inf;
    }

    match decimal_prefix_len(text) {
        Some(len) if len == text.len() => text.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Folds digits in `radix` into a float. Returns `None` on an empty or
/// invalid digit string.
pub(crate) fn fold_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

fn parse_infinity(text: &str, whole: bool) -> Option<f64> {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    let matched = if whole {
        rest == "Infinity"
    } else {
        rest.starts_with("Infinity")
    };
    matched.then_some(sign * f64::INFINITY)
}

/// Length of the longest `[+-]digits[.digits][e[+-]digits]` prefix.
fn decimal_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(end)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
