//! Weekday model.
//!
//! The grid covers a teaching week of five days. `Weekday` is a closed
//! domain: anything that is not one of the five English labels is
//! rejected at the boundary rather than carried around as a raw string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A teaching weekday.
///
/// Ordering follows the enumeration (Monday first), which is the
/// column order of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// All weekdays in grid column order.
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

impl Weekday {
    /// The English label ("Monday" .. "Friday").
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Parses an exact English label. Case-sensitive; anything outside
    /// the five-day domain yields `None`.
    pub fn parse(label: &str) -> Option<Self> {
        WEEKDAYS.iter().copied().find(|d| d.label() == label)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}
