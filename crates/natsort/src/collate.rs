//! Collation for non-ASCII tokens.
//!
//! Code point order is not meaningful for most non-Latin text, so when
//! either token contains a character beyond `U+0080` the comparator hands
//! the pair to a [`Collator`].
//!
//! Two collators ship with the crate:
//!
//! - [`TransliteratingCollator`] (the default) compares the ASCII
//!   transliteration of both strings first, so `é` sorts next to `e`.
//! - [`CodePointCollator`] is plain code point order. This is a
//!   reduced-fidelity mode for hosts that want no collation at all.
//!
//! Hosts with real locale data (ICU, for instance) can inject their own
//! collator, including a plain closure.

use std::cmp::Ordering;

use deunicode::deunicode;

/// Locale-aware string comparison.
///
/// Implementations must be antisymmetric: `compare(a, b)` is the reverse
/// of `compare(b, a)`.
///
/// Any `Fn(&str, &str) -> Ordering + Send + Sync` closure is a collator:
///
/// ```
/// use std::cmp::Ordering;
/// use natsort::{NaturalComparator, SortOptions};
///
/// let by_length = |a: &str, b: &str| a.chars().count().cmp(&b.chars().count());
/// let comparator = NaturalComparator::with_collator(SortOptions::default(), by_length);
/// assert_eq!(comparator.compare("żółw", "ćma"), Ordering::Greater);
/// ```
pub trait Collator: Send + Sync {
    /// Compares two strings.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Plain code point order.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodePointCollator;

impl Collator for CodePointCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Compares ASCII transliterations, case-insensitively, then breaks ties by
/// code point.
///
/// Only identical strings compare equal.
///
/// ```
/// use std::cmp::Ordering;
/// use natsort::{Collator, TransliteratingCollator};
///
/// let collator = TransliteratingCollator;
/// assert_eq!(collator.compare("é", "f"), Ordering::Less);
/// assert_eq!(collator.compare("e", "é"), Ordering::Less);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TransliteratingCollator;

impl Collator for TransliteratingCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary_a = deunicode(a).to_lowercase();
        let primary_b = deunicode(b).to_lowercase();
        primary_a.cmp(&primary_b).then_with(|| a.cmp(b))
    }
}

/// Returns `true` if either string contains a character beyond `U+0080`.
pub fn needs_collation(a: &str, b: &str) -> bool {
    a.chars().chain(b.chars()).any(|c| u32::from(c) > 0x80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_point_order() {
        assert_eq!(CodePointCollator.compare("a", "b"), Ordering::Less);
        assert_eq!(CodePointCollator.compare("é", "f"), Ordering::Greater);
        assert_eq!(CodePointCollator.compare("é", "é"), Ordering::Equal);
    }

    #[test]
    fn transliteration_places_accents_near_base_letter() {
        let c = TransliteratingCollator;
        assert_eq!(c.compare("é", "f"), Ordering::Less);
        assert_eq!(c.compare("é", "d"), Ordering::Greater);
        assert_eq!(c.compare("über", "uber"), Ordering::Greater);
        assert_eq!(c.compare("über", "ubes"), Ordering::Less);
    }

    #[test]
    fn transliteration_is_antisymmetric() {
        let c = TransliteratingCollator;
        let words = ["é", "e", "E", "ß", "ss", "日本", "nihon", "Ölfass"];
        for a in words {
            for b in words {
                assert_eq!(c.compare(a, b), c.compare(b, a).reverse(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn only_identical_strings_are_equal() {
        let c = TransliteratingCollator;
        assert_eq!(c.compare("ß", "ß"), Ordering::Equal);
        assert_ne!(c.compare("ß", "ss"), Ordering::Equal);
    }

    #[test]
    fn closures_are_collators() {
        let reversed = |a: &str, b: &str| b.cmp(a);
        assert_eq!(Collator::compare(&reversed, "a", "b"), Ordering::Greater);
    }

    #[test]
    fn collation_trigger() {
        assert!(!needs_collation("abc", "xyz"));
        assert!(!needs_collation("\u{80}", "a"));
        assert!(needs_collation("abc", "é"));
        assert!(needs_collation("日本", "a"));
    }
}
