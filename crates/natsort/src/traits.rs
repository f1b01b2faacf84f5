//! The [`Sortable`] trait: types the comparator accepts.
//!
//! The comparator is defined over strings and numbers. Rather than
//! stringifying arbitrary values, other types opt in by implementing
//! [`Sortable`] and returning the [`Value`] they should sort as.

use std::borrow::Cow;

use crate::value::{Number, Value};

/// Trait for types that can be compared in natural order.
///
/// Implemented for `str`, `String`, `Cow<str>`, every primitive number,
/// [`Value`] itself, and references to any `Sortable`.
///
/// # Manual Implementation
///
/// ```
/// use natsort::{natsort, SortOptions, Sortable, Value};
///
/// struct Release {
///     tag: String,
/// }
///
/// impl Sortable for Release {
///     fn sort_value(&self) -> Value<'_> {
///         Value::Text(&self.tag)
///     }
/// }
///
/// let mut releases = vec![
///     Release { tag: "v1.10".into() },
///     Release { tag: "v1.9".into() },
/// ];
/// releases.sort_by(natsort(SortOptions::default()));
/// assert_eq!(releases[0].tag, "v1.9");
/// ```
pub trait Sortable {
    /// Returns the value this item sorts as.
    fn sort_value(&self) -> Value<'_>;
}

impl Sortable for str {
    fn sort_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Sortable for String {
    fn sort_value(&self) -> Value<'_> {
        Value::Text(self.as_str())
    }
}

impl Sortable for Cow<'_, str> {
    fn sort_value(&self) -> Value<'_> {
        Value::Text(self.as_ref())
    }
}

impl Sortable for Value<'_> {
    fn sort_value(&self) -> Value<'_> {
        *self
    }
}

impl Sortable for Number {
    fn sort_value(&self) -> Value<'_> {
        Value::Number(*self)
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn sort_value(&self) -> Value<'_> {
        (**self).sort_value()
    }
}

impl<T: Sortable + ?Sized> Sortable for Box<T> {
    fn sort_value(&self) -> Value<'_> {
        (**self).sort_value()
    }
}

macro_rules! sortable_number {
    ($($t:ty),*) => {
        $(
            impl Sortable for $t {
                fn sort_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

sortable_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_sort_as_text() {
        assert_eq!("abc".sort_value(), Value::Text("abc"));
        assert_eq!(String::from("abc").sort_value(), Value::Text("abc"));
        assert_eq!(Cow::Borrowed("abc").sort_value(), Value::Text("abc"));
    }

    #[test]
    fn numbers_sort_as_numbers() {
        assert_eq!(5i32.sort_value(), Value::Number(Number::I64(5)));
        assert_eq!(5usize.sort_value(), Value::Number(Number::U64(5)));
        assert_eq!(0.5f64.sort_value(), Value::Number(Number::F64(0.5)));
    }

    #[test]
    fn references_delegate() {
        let s = String::from("x");
        let r = &&s;
        assert_eq!(r.sort_value(), Value::Text("x"));
        assert_eq!(Box::new(3u8).sort_value(), Value::Number(Number::U64(3)));
    }
}
