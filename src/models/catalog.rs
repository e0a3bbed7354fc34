//! Reference catalog: courses, subjects, rooms.
//!
//! The catalog is the caller-owned lookup set that timetable entries
//! point into via opaque string ids. The core only reads it — to
//! resolve names for display and to detect dangling references during
//! validation. CRUD over the catalog itself lives outside this crate.

use serde::{Deserialize, Serialize};

/// A degree course (e.g. "Computer Science BSc").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

/// A taught subject, belonging to one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Owning course id.
    pub course_id: String,
}

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Course {
    /// Creates a course.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Subject {
    /// Creates a subject under a course.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            course_id: course_id.into(),
        }
    }
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
        }
    }
}

/// The reference data timetable entries point into.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Known courses.
    pub courses: Vec<Course>,
    /// Known subjects.
    pub subjects: Vec<Subject>,
    /// Known rooms.
    pub rooms: Vec<Room>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Looks up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Looks up a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Looks up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Whether a subject id resolves.
    pub fn has_subject(&self, id: &str) -> bool {
        self.subject(id).is_some()
    }

    /// Whether a room id resolves.
    pub fn has_room(&self, id: &str) -> bool {
        self.room(id).is_some()
    }

    /// All subjects belonging to a course, in catalog order.
    pub fn subjects_for_course(&self, course_id: &str) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.course_id == course_id)
            .collect()
    }
}
