//! Wire types shared by the gateway, the catalog and the TUI.
//!
//! Field names on the wire are Portuguese (`nome`, `materia`) because that is
//! what the backend speaks; the Rust side uses English names.

use serde::{Deserialize, Serialize};

/// Default backend origin
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Resource path for courses
pub const COURSES_PATH: &str = "materias";

/// Resource path for subjects
pub const SUBJECTS_PATH: &str = "assuntos";

/// A course (`materia`). Read-only from this client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

impl Course {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Reference from a subject to its course.
///
/// The backend may embed the whole course here; only `id` is consumed and any
/// other fields are ignored on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    pub id: i64,
}

/// A subject (`assunto`), owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "materia")]
    pub course: CourseRef,
}

impl Subject {
    pub fn new(id: i64, name: impl Into<String>, course_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            course: CourseRef { id: course_id },
        }
    }
}

/// Course reference inside a write body. `id` is null when no course was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadCourseRef {
    pub id: Option<i64>,
}

/// Request body for create (`id: null`) and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPayload {
    pub id: Option<i64>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "materia")]
    pub course: PayloadCourseRef,
}

impl SubjectPayload {
    /// Build a payload from raw form values.
    ///
    /// `course_id` is the selection control's string value; anything that does
    /// not parse as an integer (including the empty "no selection" value) is
    /// sent as null and left for the backend to reject.
    pub fn from_form(id: Option<i64>, name: impl Into<String>, course_id: &str) -> Self {
        Self {
            id,
            name: name.into(),
            course: PayloadCourseRef {
                id: course_id.trim().parse().ok(),
            },
        }
    }

    /// True when this payload updates an existing record.
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}
