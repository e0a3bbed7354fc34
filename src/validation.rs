//! Candidate entry validation.
//!
//! Checks a half-filled entry draft before the caller commits it to
//! its timetable. Detects:
//! - Missing fields (day, times, subject, room)
//! - Inverted or empty intervals (start not strictly before end)
//! - Dangling subject/room references
//!
//! Overlap with existing entries is deliberately NOT checked; the grid
//! resolves overlaps by first match and the caller may store them.

use crate::models::{Catalog, Entry, SlotInterval, TimeSlot, Weekday};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is absent or blank.
    MissingField,
    /// Start slot is not strictly before the end slot.
    InvalidInterval,
    /// Subject or room id does not resolve in the catalog.
    UnknownReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A candidate entry under construction, every field optional.
///
/// Mirrors a partially filled form: the caller populates fields as the
/// user selects them and asks for a verdict on submit. Blank string
/// ids count as missing, not as unknown references.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    /// Selected subject id, if any.
    pub subject_id: Option<String>,
    /// Selected room id, if any.
    pub room_id: Option<String>,
    /// Selected day, if any.
    pub day: Option<Weekday>,
    /// Selected start slot, if any.
    pub time_start: Option<TimeSlot>,
    /// Selected end slot, if any.
    pub time_end: Option<TimeSlot>,
}

impl EntryDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subject id.
    pub fn with_subject(mut self, id: impl Into<String>) -> Self {
        self.subject_id = Some(id.into());
        self
    }

    /// Sets the room id.
    pub fn with_room(mut self, id: impl Into<String>) -> Self {
        self.room_id = Some(id.into());
        self
    }

    /// Sets the day.
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }

    /// Sets the start slot.
    pub fn with_start(mut self, slot: TimeSlot) -> Self {
        self.time_start = Some(slot);
        self
    }

    /// Sets the end slot.
    pub fn with_end(mut self, slot: TimeSlot) -> Self {
        self.time_end = Some(slot);
        self
    }

    /// Builds the committed entry under a caller-chosen id.
    ///
    /// Returns `None` if any field is still missing. Callers should
    /// run [`validate_draft`] first; `build` does not re-check the
    /// interval or the references.
    pub fn build(&self, id: impl Into<String>) -> Option<Entry> {
        Some(Entry::new(
            id,
            self.subject_id.clone().filter(|s| !s.is_empty())?,
            self.room_id.clone().filter(|s| !s.is_empty())?,
            self.day?,
            SlotInterval::new(self.time_start?, self.time_end?),
        ))
    }
}

/// Validates a candidate entry against the reference catalog.
///
/// Checks:
/// 1. All five fields present (blank ids count as missing)
/// 2. Start slot strictly before end slot
/// 3. Subject and room ids resolve in the catalog
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// Never mutates anything; the caller decides whether to commit.
pub fn validate_draft(draft: &EntryDraft, catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let subject_id = present_id(&draft.subject_id);
    let room_id = present_id(&draft.room_id);

    if subject_id.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "No subject selected",
        ));
    }
    if room_id.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "No room selected",
        ));
    }
    if draft.day.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "No day selected",
        ));
    }
    if draft.time_start.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "No start time selected",
        ));
    }
    if draft.time_end.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "No end time selected",
        ));
    }

    if let (Some(start), Some(end)) = (draft.time_start, draft.time_end) {
        if start >= end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!("End time {end} must be after start time {start}"),
            ));
        }
    }

    if let Some(id) = subject_id {
        if !catalog.has_subject(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Unknown subject '{id}'"),
            ));
        }
    }
    if let Some(id) = room_id {
        if !catalog.has_room(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Unknown room '{id}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn present_id(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Room, Subject};

    fn slot(hour: u8) -> TimeSlot {
        TimeSlot::from_hour(hour).unwrap()
    }

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_course(Course::new("C1", "Computer Science BSc"))
            .with_subject(Subject::new("S1", "Introduction to Programming", "C1"))
            .with_room(Room::new("R101", "Lab A", 30))
    }

    fn complete_draft() -> EntryDraft {
        EntryDraft::new()
            .with_subject("S1")
            .with_room("R101")
            .with_day(Weekday::Monday)
            .with_start(slot(9))
            .with_end(slot(10))
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_draft(&complete_draft(), &sample_catalog()).is_ok());
    }

    #[test]
    fn test_missing_day() {
        let mut draft = complete_draft();
        draft.day = None;

        let errors = validate_draft(&draft, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingField && e.message.contains("day")));
    }

    #[test]
    fn test_blank_id_is_missing_not_unknown() {
        let draft = complete_draft().with_subject("");

        let errors = validate_draft(&draft, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingField));
        assert!(!errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownReference));
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = validate_draft(&EntryDraft::new(), &sample_catalog()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MissingField));
    }

    #[test]
    fn test_inverted_interval() {
        let draft = complete_draft().with_start(slot(10)).with_end(slot(9));

        let errors = validate_draft(&draft, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidInterval));
    }

    #[test]
    fn test_zero_length_interval() {
        let draft = complete_draft().with_start(slot(9)).with_end(slot(9));

        let errors = validate_draft(&draft, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidInterval));
    }

    #[test]
    fn test_unknown_subject() {
        let draft = complete_draft().with_subject("S99");

        let errors = validate_draft(&draft, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownReference
                && e.message.contains("subject")));
    }

    #[test]
    fn test_unknown_room() {
        let draft = complete_draft().with_room("R999");

        let errors = validate_draft(&draft, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownReference
                && e.message.contains("room")));
    }

    #[test]
    fn test_multiple_errors() {
        // Missing room + inverted interval, reported together.
        let mut draft = complete_draft().with_start(slot(12)).with_end(slot(11));
        draft.room_id = None;

        let errors = validate_draft(&draft, &sample_catalog()).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_build_complete_draft() {
        let entry = complete_draft().build("42").unwrap();
        assert_eq!(entry.id, "42");
        assert_eq!(entry.subject_id, "S1");
        assert_eq!(entry.day, Weekday::Monday);
        assert!(entry.interval.contains(slot(9)));
    }

    #[test]
    fn test_build_incomplete_draft() {
        let mut draft = complete_draft();
        draft.time_end = None;
        assert!(draft.build("42").is_none());

        assert!(complete_draft().with_room("").build("42").is_none());
    }
}
