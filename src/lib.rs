//! Weekly timetable core.
//!
//! Provides the domain types and pure functions behind a university
//! timetable view: a closed weekday/time-slot domain, projection of
//! scheduled entries onto a week grid, and validation of candidate
//! entries before the caller commits them.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `TimeSlot`, `SlotInterval`,
//!   `Entry`, `Timetable`, `Catalog`
//! - **`grid`**: `GridAxes` and `GridProjection` — the (day, slot) →
//!   entry cell mapping consumed by a grid renderer
//! - **`validation`**: Candidate entry checks (missing fields, inverted
//!   intervals, dangling subject/room references)
//!
//! # Design
//!
//! The crate holds no state and performs no I/O. Callers own the entry
//! collection and pass immutable snapshots in; every operation is a
//! synchronous pure function. Overlapping entries are deliberately
//! allowed — projection resolves contested cells by first match in
//! input order.

pub mod grid;
pub mod models;
pub mod validation;
