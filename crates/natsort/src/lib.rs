//! Natsort - natural-order comparison for strings and numbers.
//!
//! Sorting `["img12.png", "img10.png", "img2.png"]` lexically puts `img10`
//! before `img2`. A natural-order comparator treats the embedded numbers as
//! numbers instead:
//!
//! ```rust
//! use natsort::{natsort, SortOptions};
//!
//! let mut files = vec!["img12.png", "img2.png", "img1.png", "img10.png"];
//! files.sort_by(natsort(SortOptions::default()));
//! assert_eq!(files, ["img1.png", "img2.png", "img10.png", "img12.png"]);
//! ```
//!
//! Beyond digit runs, the comparator understands:
//!
//! - signed and fractional numbers, exponents (`-1.5e3`)
//! - hexadecimal literals (`0x1f < 0x20`)
//! - dates in fixed formats (`2024-01-09 < 2024-01-10`)
//! - non-ASCII text, through a pluggable [`Collator`]
//!
//! # Configuration
//!
//! [`SortOptions`] carries the sort direction and case sensitivity. It
//! deserializes from the `{ "direction": "DESC", "caseSensitive": true }`
//! shape with serde, missing fields taking their defaults (ascending,
//! case-insensitive).
//!
//! | Rule | Ascending |
//! |------|-----------|
//! | Empty values | first |
//! | Numbers vs text | numbers first |
//! | Digit runs | numeric order |
//! | Hex pair / date pair | integer order |
//! | Non-ASCII text | collator order |
//! | Everything else | lexical order |
//!
//! Descending mirrors every rule.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `debug` when a comparator is built,
//! `trace` when a hex or date fast path decides a comparison. Nothing is
//! printed unless the host installs a subscriber.

mod collate;
mod comparator;
mod error;
mod fast_path;
mod ordering;
mod token;
mod traits;
mod value;

// Re-export public API
pub use collate::{needs_collation, CodePointCollator, Collator, TransliteratingCollator};
pub use comparator::{natsort, sort, sort_by_key, sorted, NaturalComparator};
pub use error::{NatsortError, Result};
pub use fast_path::{looks_like_date, parse_hex, parse_timestamp, FastPath};
pub use ordering::{Dir, SortOptions};
pub use token::{parse_float_prefix, to_number, tokenize, Key};
pub use traits::Sortable;
pub use value::{Number, Value};
