//! Exam calendar: days, periods, subjects and coordinators.
//!
//! The plan is owned by the roster store and handed to the engine
//! read-only. It answers two questions for the eligibility rules:
//!
//! - Where does a day fall in the exam sequence? (`day_ordinal`)
//! - Is a teacher coordinating a subject examined in a period?
//!   (`coordinates_in_period`)
//!
//! # Case handling
//! Subject names are compared lower-cased. Period and day names are
//! compared exactly, as entered.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of an exam day within the configured exam-day sequence.
///
/// Rooms whose day is unset, or not in the sequence, have no ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayOrdinal(pub usize);

impl DayOrdinal {
    /// Number of days between two ordinals.
    #[inline]
    pub fn distance(self, other: Self) -> usize {
        self.0.abs_diff(other.0)
    }
}

/// The exam calendar a guard run is planned against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamPlan {
    /// Ordered exam days.
    pub exam_days: Vec<String>,
    /// Exam periods (e.g. morning, afternoon).
    pub periods: Vec<String>,
    /// Period → subjects examined in that period (lower-cased).
    pub period_subjects: HashMap<String, Vec<String>>,
    /// Subject → coordinating teacher name.
    pub coordinators: HashMap<String, String>,
}

impl ExamPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an exam day.
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.exam_days.push(day.into());
        self
    }

    /// Appends several exam days.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exam_days.extend(days.into_iter().map(Into::into));
        self
    }

    /// Registers a period (with no subjects yet).
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        let period = period.into();
        self.period_subjects.entry(period.clone()).or_default();
        if !self.periods.contains(&period) {
            self.periods.push(period);
        }
        self
    }

    /// Schedules a subject in a period, registering the period if needed.
    pub fn with_subject(mut self, period: impl Into<String>, subject: impl Into<String>) -> Self {
        let period = period.into();
        self = self.with_period(period.clone());
        self.period_subjects
            .entry(period)
            .or_default()
            .push(subject.into().to_lowercase());
        self
    }

    /// Registers the coordinator of a subject.
    pub fn with_coordinator(
        mut self,
        subject: impl Into<String>,
        teacher: impl Into<String>,
    ) -> Self {
        self.coordinators
            .insert(subject.into().to_lowercase(), teacher.into());
        self
    }

    /// Number of configured exam days.
    pub fn day_count(&self) -> usize {
        self.exam_days.len()
    }

    /// Ordinal of a day name in the exam sequence.
    pub fn day_ordinal(&self, day: &str) -> Option<DayOrdinal> {
        self.exam_days.iter().position(|d| d == day).map(DayOrdinal)
    }

    /// Subjects examined in a period (empty if unknown).
    pub fn subjects_in(&self, period: &str) -> &[String] {
        self.period_subjects
            .get(period)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a subject is examined in a period (case-insensitive).
    pub fn is_examined_in(&self, subject: &str, period: &str) -> bool {
        let subject = subject.to_lowercase();
        self.subjects_in(period)
            .iter()
            .any(|s| s.to_lowercase() == subject)
    }

    /// Whether a teacher coordinates any subject examined in `period`.
    pub fn coordinates_in_period(&self, teacher: &str, period: &str) -> bool {
        self.coordinators
            .iter()
            .any(|(subject, name)| name == teacher && self.is_examined_in(subject, period))
    }
}
