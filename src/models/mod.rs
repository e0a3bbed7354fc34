//! Timetable domain models.
//!
//! Provides the closed day/slot domains, the half-open slot interval,
//! committed entries with their ordered collection, and the reference
//! catalog entries point into.

mod catalog;
mod day;
mod entry;
mod interval;
mod slot;

pub use catalog::{Catalog, Course, Room, Subject};
pub use day::{Weekday, WEEKDAYS};
pub use entry::{Entry, Timetable};
pub use interval::SlotInterval;
pub use slot::{TimeSlot, DAY_END_HOUR, DAY_START_HOUR};
