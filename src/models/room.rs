//! Exam room model.
//!
//! A room is one exam sitting: a named space bound to an exam day and a
//! period. Day and period are optional at creation; the engine still
//! staffs rooms that lack them, but day-based rules cannot apply.

use serde::{Deserialize, Deserializer, Serialize};

/// An exam room to be staffed with guards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier (assigned sequentially by the roster store).
    pub id: u32,
    /// Room name or number.
    pub name: String,
    /// Exam day name. `None` = not yet scheduled.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub day: Option<String>,
    /// Exam period name. `None` = not yet scheduled.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub period: Option<String>,
}

impl Room {
    /// Creates an unscheduled room.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            day: None,
            period: None,
        }
    }

    /// Sets the exam day.
    pub fn on_day(mut self, day: impl Into<String>) -> Self {
        self.day = non_blank(day.into());
        self
    }

    /// Sets the exam period.
    pub fn in_period(mut self, period: impl Into<String>) -> Self {
        self.period = non_blank(period.into());
        self
    }

    /// Exam day, if set.
    pub fn day(&self) -> Option<&str> {
        self.day.as_deref()
    }

    /// Exam period, if set.
    pub fn period(&self) -> Option<&str> {
        self.period.as_deref()
    }
}

pub(crate) fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// Accepts `null`, a missing field, or `""` as "not set".
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(non_blank))
}
