//! Teacher (guard candidate) model.
//!
//! Teachers are the people rotated through exam rooms. A teacher is
//! identified by name; the subject is used to match coordinator
//! registrations and is kept lower-cased.

use serde::{Deserialize, Serialize};

/// A teacher who may be assigned to guard exam rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique, non-empty teacher name.
    pub name: String,
    /// Teaching subject (lower-cased).
    #[serde(default)]
    pub subject: String,
}

impl Teacher {
    /// Creates a teacher. The subject is lower-cased.
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into().to_lowercase(),
        }
    }
}
