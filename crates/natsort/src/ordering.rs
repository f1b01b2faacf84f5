//! Sort configuration.
//!
//! Provides [`Dir`] for sort direction and [`SortOptions`], the immutable
//! configuration a [`NaturalComparator`](crate::NaturalComparator) is built from.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NatsortError;

/// Sort direction.
///
/// Serialized as `"ASC"` / `"DESC"`. Parsing is case-insensitive and also
/// accepts `ascending` / `descending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// The ordering returned when the left value sorts after the right one.
    pub fn greater(self) -> Ordering {
        self.apply(Ordering::Greater)
    }

    /// The ordering returned when the left value sorts before the right one.
    pub fn smaller(self) -> Ordering {
        self.apply(Ordering::Less)
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }

    /// Returns the wire name of this direction (`ASC` / `DESC`).
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Dir::Asc => "ASC",
            Dir::Desc => "DESC",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = NatsortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(NatsortError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dir {
    type Error = NatsortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dir> for String {
    fn from(dir: Dir) -> Self {
        dir.as_wire_str().to_string()
    }
}

/// Comparator configuration.
///
/// Defaults to ascending, case-insensitive. Field names follow the
/// `{ "direction": "ASC", "caseSensitive": false }` wire shape, and missing
/// fields take their defaults.
///
/// # Example
///
/// ```
/// use natsort::{Dir, SortOptions};
///
/// let options = SortOptions::new().desc().case_sensitive(true);
/// assert_eq!(options.direction, Dir::Desc);
/// assert!(options.case_sensitive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortOptions {
    /// The sort direction.
    pub direction: Dir,
    /// Compare without case folding.
    pub case_sensitive: bool,
}

impl SortOptions {
    /// Creates the default options (ascending, case-insensitive).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets ascending order.
    pub fn asc(mut self) -> Self {
        self.direction = Dir::Asc;
        self
    }

    /// Sets descending order.
    pub fn desc(mut self) -> Self {
        self.direction = Dir::Desc;
        self
    }

    /// Sets the sort direction.
    pub fn direction(mut self, direction: Dir) -> Self {
        self.direction = direction;
        self
    }

    /// Sets case sensitivity.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl From<Dir> for SortOptions {
    fn from(direction: Dir) -> Self {
        SortOptions {
            direction,
            ..SortOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn greater_and_smaller_follow_direction() {
        assert_eq!(Dir::Asc.greater(), Ordering::Greater);
        assert_eq!(Dir::Asc.smaller(), Ordering::Less);
        assert_eq!(Dir::Desc.greater(), Ordering::Less);
        assert_eq!(Dir::Desc.smaller(), Ordering::Greater);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn dir_from_str() {
        assert_eq!("ASC".parse::<Dir>(), Ok(Dir::Asc));
        assert_eq!("desc".parse::<Dir>(), Ok(Dir::Desc));
        assert_eq!(" Descending ".parse::<Dir>(), Ok(Dir::Desc));
        assert_eq!(
            "sideways".parse::<Dir>(),
            Err(NatsortError::InvalidDirection("sideways".to_string()))
        );
    }

    #[test]
    fn options_default() {
        let options = SortOptions::default();
        assert_eq!(options.direction, Dir::Asc);
        assert!(!options.case_sensitive);
    }

    #[test]
    fn options_builders() {
        let options = SortOptions::new().desc().case_sensitive(true);
        assert_eq!(options.direction, Dir::Desc);
        assert!(options.case_sensitive);

        let options = options.asc();
        assert_eq!(options.direction, Dir::Asc);

        assert_eq!(SortOptions::from(Dir::Desc).direction, Dir::Desc);
    }
}
