//! Slot interval model.
//!
//! A class occupies a half-open run of slots `[start, end)`: an entry
//! from 09:00 to 11:00 fills the 09:00 and 10:00 cells but not the
//! 11:00 cell. The validator guarantees `start < end` for committed
//! entries; the interval itself does not enforce it, and an inverted
//! or empty interval simply contains no slot.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeSlot;

/// A half-open run of time slots `[start, end)`.
///
/// The derived `Ord` (start first, then end) is the display order used
/// to sort entry lists; projection never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotInterval {
    /// First occupied slot (inclusive).
    pub start: TimeSlot,
    /// First slot past the run (exclusive).
    pub end: TimeSlot,
}

impl SlotInterval {
    /// Creates an interval.
    pub fn new(start: TimeSlot, end: TimeSlot) -> Self {
        Self { start, end }
    }

    /// Whether a slot falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, slot: TimeSlot) -> bool {
        self.start <= slot && slot < self.end
    }

    /// Whether two intervals share at least one slot.
    ///
    /// Informational only — the core stores and projects overlapping
    /// entries without complaint.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Number of slots covered (0 for inverted or empty intervals).
    pub fn slot_count(&self) -> u8 {
        self.end.hour().saturating_sub(self.start.hour())
    }
}

impl fmt::Display for SlotInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
