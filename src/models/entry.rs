//! Timetable entry and entry-set models.
//!
//! An `Entry` is one committed booking: a subject taught in a room on
//! a weekday over a half-open run of slots. A `Timetable` is the
//! caller-owned ordered collection of entries; this crate only queries
//! it. Insertion order is significant in exactly one place — when two
//! overlapping entries contest a grid cell, the earlier one wins.

use serde::{Deserialize, Serialize};

use super::{Catalog, SlotInterval, TimeSlot, Weekday};

/// A committed timetable entry.
///
/// `subject_id` and `room_id` are opaque foreign keys into the
/// caller's [`Catalog`]; the entry does not embed the referenced
/// records. The validator establishes `interval.start < interval.end`
/// before an entry is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique entry identifier.
    pub id: String,
    /// Taught subject (foreign key).
    pub subject_id: String,
    /// Hosting room (foreign key).
    pub room_id: String,
    /// Day of the week.
    pub day: Weekday,
    /// Occupied slots, half-open.
    pub interval: SlotInterval,
}

impl Entry {
    /// Creates an entry.
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        room_id: impl Into<String>,
        day: Weekday,
        interval: SlotInterval,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            room_id: room_id.into(),
            day,
            interval,
        }
    }

    /// Whether this entry occupies a given cell.
    #[inline]
    pub fn occupies(&self, day: Weekday, slot: TimeSlot) -> bool {
        self.day == day && self.interval.contains(slot)
    }
}

/// An ordered, read-only set of timetable entries.
///
/// The caller owns the collection and mutates it between calls;
/// within a call this is an immutable snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    entries: Vec<Entry>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a timetable from entries, preserving order.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries on a given day, in insertion order.
    pub fn entries_for_day(&self, day: Weekday) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// First entry occupying a cell, if any.
    ///
    /// The single-cell form of grid projection: first match in
    /// insertion order wins on overlaps.
    pub fn entry_at(&self, day: Weekday, slot: TimeSlot) -> Option<&Entry> {
        self.entries.iter().find(|e| e.occupies(day, slot))
    }

    /// Entries sorted by day then interval, for list display.
    pub fn sorted_for_display(&self) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| (e.day, e.interval));
        sorted
    }

    /// Entries whose subject belongs to the given course.
    pub fn for_course<'a>(&'a self, catalog: &Catalog, course_id: &str) -> Vec<&'a Entry> {
        self.entries
            .iter()
            .filter(|e| {
                catalog
                    .subject(&e.subject_id)
                    .is_some_and(|s| s.course_id == course_id)
            })
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timetable has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
