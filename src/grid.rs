//! Week grid projection.
//!
//! Maps an ordered entry set onto fixed (day, slot) axes, answering
//! "which entry, if any, occupies this cell" for every cell of the
//! rendered week grid. Projection is a pure scan: for each cell, the
//! first entry in input order whose day matches and whose interval
//! contains the slot wins. Unmatched cells are empty — never an error.

use serde::{Deserialize, Serialize};

use crate::models::{Entry, TimeSlot, Timetable, Weekday, WEEKDAYS};

/// The fixed axes of a week grid: days as columns, slots as rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridAxes {
    /// Column order.
    pub days: Vec<Weekday>,
    /// Row order.
    pub slots: Vec<TimeSlot>,
}

impl GridAxes {
    /// Creates axes from explicit sequences.
    pub fn new(days: Vec<Weekday>, slots: Vec<TimeSlot>) -> Self {
        Self { days, slots }
    }

    /// The standard teaching week: Monday..Friday columns, hourly
    /// 08:00..17:00 rows.
    pub fn standard_week() -> Self {
        Self {
            days: WEEKDAYS.to_vec(),
            slots: TimeSlot::all().collect(),
        }
    }

    /// Total number of grid cells (`|days| × |slots|`).
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.slots.len()
    }

    /// Projects a timetable snapshot onto these axes.
    ///
    /// Every cell of the cross product is resolved; overlapping
    /// entries are not rejected, the earlier entry simply claims the
    /// contested cells. Deterministic for a given input.
    pub fn project<'a>(&self, timetable: &'a Timetable) -> GridProjection<'a> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for &slot in &self.slots {
            for &day in &self.days {
                cells.push(timetable.entry_at(day, slot));
            }
        }
        GridProjection {
            days: self.days.clone(),
            slots: self.slots.clone(),
            cells,
        }
    }
}

impl Default for GridAxes {
    fn default() -> Self {
        Self::standard_week()
    }
}

/// The resolved cell occupancy of one projection call.
///
/// Holds exactly `|days| × |slots|` cells, each empty or referencing
/// one entry from the projected snapshot. Row-major storage, rows =
/// slots, matching the top-to-bottom rendering order of the grid.
#[derive(Debug, Clone)]
pub struct GridProjection<'a> {
    days: Vec<Weekday>,
    slots: Vec<TimeSlot>,
    cells: Vec<Option<&'a Entry>>,
}

impl<'a> GridProjection<'a> {
    /// Column order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Row order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// The entry occupying a cell, if any.
    ///
    /// Off-axis coordinates yield `None` like any other empty cell.
    pub fn cell(&self, day: Weekday, slot: TimeSlot) -> Option<&'a Entry> {
        let col = self.days.iter().position(|&d| d == day)?;
        let row = self.slots.iter().position(|&s| s == slot)?;
        self.cells[row * self.days.len() + col]
    }

    /// Iterates all cells in row-major render order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, TimeSlot, Option<&'a Entry>)> + '_ {
        self.slots.iter().flat_map(move |&slot| {
            self.days.iter().map(move |&day| {
                (day, slot, self.cell(day, slot))
            })
        })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells holding an entry.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotInterval;

    fn slot(hour: u8) -> TimeSlot {
        TimeSlot::from_hour(hour).unwrap()
    }

    fn entry(id: &str, day: Weekday, start: u8, end: u8) -> Entry {
        Entry::new(
            id,
            format!("S{id}"),
            format!("R{id}"),
            day,
            SlotInterval::new(slot(start), slot(end)),
        )
    }

    #[test]
    fn test_standard_week_shape() {
        let axes = GridAxes::standard_week();
        assert_eq!(axes.days.len(), 5);
        assert_eq!(axes.slots.len(), 10);
        assert_eq!(axes.cell_count(), 50);
    }

    #[test]
    fn test_projection_covers_interval() {
        let tt = Timetable::from_entries(vec![entry("1", Weekday::Monday, 9, 11)]);
        let grid = GridAxes::standard_week().project(&tt);

        assert_eq!(grid.cell(Weekday::Monday, slot(9)).unwrap().id, "1");
        assert_eq!(grid.cell(Weekday::Monday, slot(10)).unwrap().id, "1");
        assert!(grid.cell(Weekday::Monday, slot(11)).is_none());
        assert!(grid.cell(Weekday::Monday, slot(8)).is_none());
        assert!(grid.cell(Weekday::Tuesday, slot(9)).is_none());
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_projection_cell_count_invariant() {
        let empty = Timetable::new();
        let grid = GridAxes::standard_week().project(&empty);
        assert_eq!(grid.cell_count(), 50);
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.iter().count(), 50);
    }

    #[test]
    fn test_projection_first_match_on_overlap() {
        let tt = Timetable::from_entries(vec![
            entry("1", Weekday::Monday, 9, 12),
            entry("2", Weekday::Monday, 10, 13),
        ]);
        let grid = GridAxes::standard_week().project(&tt);

        // Contested cells go to the earlier entry.
        assert_eq!(grid.cell(Weekday::Monday, slot(10)).unwrap().id, "1");
        assert_eq!(grid.cell(Weekday::Monday, slot(11)).unwrap().id, "1");
        // Past the first entry's end, the second takes over.
        assert_eq!(grid.cell(Weekday::Monday, slot(12)).unwrap().id, "2");
    }

    #[test]
    fn test_projection_deterministic() {
        let tt = Timetable::from_entries(vec![
            entry("1", Weekday::Monday, 9, 11),
            entry("2", Weekday::Wednesday, 10, 12),
        ]);
        let axes = GridAxes::standard_week();
        let first = axes.project(&tt);
        let second = axes.project(&tt);

        for ((d1, s1, c1), (d2, s2, c2)) in first.iter().zip(second.iter()) {
            assert_eq!((d1, s1), (d2, s2));
            assert_eq!(c1.map(|e| &e.id), c2.map(|e| &e.id));
        }
    }

    #[test]
    fn test_projection_iter_render_order() {
        let tt = Timetable::new();
        let grid = GridAxes::standard_week().project(&tt);
        let cells: Vec<(Weekday, TimeSlot)> = grid.iter().map(|(d, s, _)| (d, s)).collect();

        // First row is the 08:00 slot across all five days.
        assert_eq!(cells[0], (Weekday::Monday, slot(8)));
        assert_eq!(cells[4], (Weekday::Friday, slot(8)));
        // Second row starts the 09:00 slot.
        assert_eq!(cells[5], (Weekday::Monday, slot(9)));
        // Last cell is Friday 17:00.
        assert_eq!(cells[49], (Weekday::Friday, slot(17)));
    }

    #[test]
    fn test_projection_custom_axes() {
        // A grid restricted to two days and the morning slots.
        let axes = GridAxes::new(
            vec![Weekday::Monday, Weekday::Tuesday],
            (8..=12).map(slot).collect(),
        );
        let tt = Timetable::from_entries(vec![
            entry("1", Weekday::Monday, 9, 11),
            entry("2", Weekday::Friday, 9, 11), // off-axis day
        ]);
        let grid = axes.project(&tt);

        assert_eq!(grid.cell_count(), 10);
        assert_eq!(grid.occupied_count(), 2);
        // Friday is not a column, so its entry is invisible here.
        assert!(grid.cell(Weekday::Friday, slot(9)).is_none());
    }

    #[test]
    fn test_entry_spanning_whole_day() {
        let tt = Timetable::from_entries(vec![entry("1", Weekday::Thursday, 8, 17)]);
        let grid = GridAxes::standard_week().project(&tt);

        assert_eq!(grid.occupied_count(), 9);
        // 17:00 is the exclusive end; its row stays empty.
        assert!(grid.cell(Weekday::Thursday, slot(17)).is_none());
    }
}
