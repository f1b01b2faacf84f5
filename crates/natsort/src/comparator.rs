//! The natural-order comparator.
//!
//! [`NaturalComparator`] orders strings and numbers the way people expect:
//! `item2` before `item10`, `0x1f` before `0x20`, `2024-01-09` before
//! `2024-01-10`. It is built once from [`SortOptions`] and holds no state
//! between calls, so it can be shared across threads and handed to any
//! sort routine.
//!
//! # Algorithm
//!
//! 1. Both values are rendered as text, case-folded unless the comparator is
//!    case-sensitive, and trimmed.
//! 2. Empty values sort first.
//! 3. Each value is split into alternating text and numeric tokens.
//! 4. If both values are hex literals, or both are dates, they are compared
//!    as integers and the comparison ends.
//! 5. Otherwise tokens are compared pairwise, numbers before text, numbers
//!    numerically, non-ASCII text through the [`Collator`], everything else
//!    lexically.
//!
//! Every rule is mirrored by the sort direction.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::collate::{needs_collation, Collator, TransliteratingCollator};
use crate::fast_path::FastPath;
use crate::ordering::SortOptions;
use crate::token::{tokenize, trim, Key};
use crate::traits::Sortable;
use crate::value::Value;

/// Natural-order comparator.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use natsort::{NaturalComparator, SortOptions};
///
/// let comparator = NaturalComparator::new(SortOptions::default());
/// assert_eq!(comparator.compare("item2", "item10"), Ordering::Less);
/// assert_eq!(comparator.compare("Apple", "apple"), Ordering::Equal);
/// assert_eq!(comparator.compare(&10, "9"), Ordering::Greater);
///
/// let mut files = vec!["img12.png", "img2.png", "img1.png", "img10.png"];
/// comparator.sort(&mut files);
/// assert_eq!(files, ["img1.png", "img2.png", "img10.png", "img12.png"]);
/// ```
#[derive(Debug, Clone)]
pub struct NaturalComparator<C = TransliteratingCollator> {
    options: SortOptions,
    collator: C,
}

impl NaturalComparator {
    /// Creates a comparator using the default transliterating collator.
    pub fn new(options: SortOptions) -> Self {
        Self::with_collator(options, TransliteratingCollator)
    }
}

impl Default for NaturalComparator {
    fn default() -> Self {
        Self::new(SortOptions::default())
    }
}

impl<C: Collator> NaturalComparator<C> {
    /// Creates a comparator that collates non-ASCII text with `collator`.
    pub fn with_collator(options: SortOptions, collator: C) -> Self {
        tracing::debug!(
            direction = %options.direction,
            case_sensitive = options.case_sensitive,
            "natural comparator built"
        );
        NaturalComparator { options, collator }
    }

    /// The options this comparator was built with.
    pub fn options(&self) -> SortOptions {
        self.options
    }

    /// The collator used for non-ASCII text.
    pub fn collator(&self) -> &C {
        &self.collator
    }

    /// Compares two sortable values.
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Ordering
    where
        A: Sortable + ?Sized,
        B: Sortable + ?Sized,
    {
        self.compare_values(&a.sort_value(), &b.sort_value())
    }

    /// Compares two values.
    pub fn compare_values(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        let dir = self.options.direction;
        let a = self.normalize(a);
        let b = self.normalize(b);

        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return dir.smaller(),
            (false, true) => return dir.greater(),
            (false, false) => {}
        }

        let a_tokens = tokenize(&a);
        let b_tokens = tokenize(&b);

        if let Some(fast) = FastPath::detect(&a, a_tokens.len(), &b) {
            return dir.apply(fast.ordering());
        }

        self.compare_tokens(&a_tokens, &b_tokens)
    }

    fn normalize<'v>(&self, value: &Value<'v>) -> Cow<'v, str> {
        let text = value.to_text();
        if !self.options.case_sensitive {
            return Cow::Owned(trim(&text.to_lowercase()).to_string());
        }
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(trim(s)),
            Cow::Owned(s) => Cow::Owned(trim(&s).to_string()),
        }
    }

    fn compare_tokens(&self, a: &[&str], b: &[&str]) -> Ordering {
        let dir = self.options.direction;
        let len = a.len().max(b.len());

        for i in 0..len {
            let af = Key::parse(a.get(i).copied().unwrap_or_default(), a.len());
            let bf = Key::parse(b.get(i).copied().unwrap_or_default(), b.len());

            // Numbers sort before text
            match (af.is_nan(), bf.is_nan()) {
                (true, false) => return dir.greater(),
                (false, true) => return dir.smaller(),
                _ => {}
            }

            let a_text = af.as_text();
            let b_text = bf.as_text();

            if needs_collation(&a_text, &b_text) {
                match self.collator.compare(&a_text, &b_text) {
                    Ordering::Equal if i == len - 1 => return Ordering::Equal,
                    Ordering::Equal => continue,
                    ordering => return dir.apply(ordering),
                }
            }

            match af.relate(&bf) {
                Some(Ordering::Equal) | None => {}
                Some(ordering) => return dir.apply(ordering),
            }

            match a_text.cmp(&b_text) {
                Ordering::Equal => {}
                ordering => return dir.apply(ordering),
            }
        }

        Ordering::Equal
    }

    /// Sorts a slice in natural order. The sort is stable.
    ///
    /// The comparison is not transitive for every mix of inputs (a date
    /// with an offset, the same date in UTC and near-date text can form a
    /// cycle). The sort still terminates with some permutation of the
    /// input and never panics.
    pub fn sort<T: Sortable>(&self, items: &mut [T]) {
        merge_sort_by(items, |a, b| self.compare(a, b));
    }

    /// Sorts a slice in natural order of the value `key` extracts from each
    /// item. The sort is stable.
    ///
    /// ```
    /// use natsort::{NaturalComparator, SortOptions, Value};
    ///
    /// struct Track {
    ///     title: String,
    /// }
    ///
    /// let mut tracks = vec![
    ///     Track { title: "Track 10".into() },
    ///     Track { title: "Track 9".into() },
    /// ];
    /// NaturalComparator::new(SortOptions::default())
    ///     .sort_by_key(&mut tracks, |t| Value::Text(&t.title));
    /// assert_eq!(tracks[0].title, "Track 9");
    /// ```
    pub fn sort_by_key<T, F>(&self, items: &mut [T], key: F)
    where
        F: for<'a> Fn(&'a T) -> Value<'a>,
    {
        merge_sort_by(items, |a, b| self.compare_values(&key(a), &key(b)));
    }
}

/// Stable bottom-up merge sort over indices.
///
/// Unlike `slice::sort_by`, this tolerates a comparison that is not a total
/// order: every merge step only asks which head is smaller.
fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = vec![0; len];
    let mut width = 1;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut merged[start..end] {
                // Ties take the left run to keep the sort stable
                let take_right = left >= mid
                    || (right < end && compare(&items[order[right]], &items[order[left]]).is_lt());
                if take_right {
                    *slot = order[right];
                    right += 1;
                } else {
                    *slot = order[left];
                    left += 1;
                }
            }
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    apply_permutation(items, &order);
}

/// Moves `items[order[k]]` to position `k`, following each cycle once.
fn apply_permutation<T>(items: &mut [T], order: &[usize]) {
    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        let mut slot = start;
        while !placed[slot] {
            placed[slot] = true;
            let source = order[slot];
            if source == start {
                break;
            }
            items.swap(slot, source);
            slot = source;
        }
    }
}

/// Builds a comparison function from options.
///
/// The returned closure can be passed straight to `sort_by`. The standard
/// library sorts may panic when they detect a comparison cycle, so for
/// arbitrary input prefer [`sort`] or [`sorted`].
///
/// ```
/// use natsort::{natsort, SortOptions};
///
/// let mut names = vec!["a10", "a2", "a1"];
/// names.sort_by(natsort(SortOptions::default()));
/// assert_eq!(names, ["a1", "a2", "a10"]);
///
/// names.sort_by(natsort(SortOptions::new().desc()));
/// assert_eq!(names, ["a10", "a2", "a1"]);
/// ```
pub fn natsort<T>(options: SortOptions) -> impl Fn(&T, &T) -> Ordering + Clone + Send + Sync
where
    T: Sortable + ?Sized,
{
    let comparator = NaturalComparator::new(options);
    move |a: &T, b: &T| comparator.compare(a, b)
}

/// Sorts a slice in natural order.
pub fn sort<T: Sortable>(items: &mut [T], options: SortOptions) {
    NaturalComparator::new(options).sort(items);
}

/// Sorts a slice in natural order of an extracted value.
pub fn sort_by_key<T, F>(items: &mut [T], options: SortOptions, key: F)
where
    F: for<'a> Fn(&'a T) -> Value<'a>,
{
    NaturalComparator::new(options).sort_by_key(items, key);
}

/// Collects an iterator into a naturally sorted `Vec`.
///
/// ```
/// use natsort::{sorted, SortOptions};
///
/// let versions = sorted(["v1.10", "v1.9", "v1.1"], SortOptions::default());
/// assert_eq!(versions, ["v1.1", "v1.9", "v1.10"]);
/// ```
pub fn sorted<I>(items: I, options: SortOptions) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Sortable,
{
    let mut items: Vec<_> = items.into_iter().collect();
    sort(&mut items, options);
    items
}
