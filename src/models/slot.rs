//! Time slot model.
//!
//! The grid uses a fixed hourly granularity: ten slots labelled
//! "08:00" through "17:00". `TimeSlot` is a closed domain over those
//! labels; construction outside the teaching day fails. Because the
//! labels are zero-padded 24-hour strings, lexicographic order of the
//! labels and chronological order of the slots coincide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// First slot of the teaching day (08:00).
pub const DAY_START_HOUR: u8 = 8;
/// Last slot of the teaching day (17:00).
pub const DAY_END_HOUR: u8 = 17;

/// One discrete hourly slot of the teaching day.
///
/// Ordering is chronological. The domain is closed: only hours in
/// `08..=17` are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
}

impl TimeSlot {
    /// Creates a slot from an hour number, rejecting hours outside the
    /// teaching day.
    pub fn from_hour(hour: u8) -> Option<Self> {
        if (DAY_START_HOUR..=DAY_END_HOUR).contains(&hour) {
            Some(Self { hour })
        } else {
            None
        }
    }

    /// Parses a zero-padded `HH:00` label within the domain.
    ///
    /// Sub-hour labels ("13:30") and out-of-day labels ("18:00") are
    /// rejected; the grid has no cells for them.
    pub fn parse(label: &str) -> Option<Self> {
        let (hh, mm) = label.split_once(':')?;
        if hh.len() != 2 || mm != "00" {
            return None;
        }
        Self::from_hour(hh.parse().ok()?)
    }

    /// The hour number (8..=17).
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The zero-padded label, e.g. "09:00".
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }

    /// All slots of the teaching day in row order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (DAY_START_HOUR..=DAY_END_HOUR).map(|hour| TimeSlot { hour })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.hour)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::parse(&label).ok_or_else(|| format!("time slot out of domain: {label:?}"))
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label()
    }
}
