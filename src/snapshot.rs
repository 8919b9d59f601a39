//! Input snapshot handed over by the roster store.
//!
//! A [`GuardSnapshot`] is an immutable copy of everything one guard run
//! reads: roster, rooms, exam plan and rules. The roster store owns the
//! live data; the engine only ever sees a snapshot.
//!
//! # Stored document
//!
//! [`GuardSnapshot::from_json`] reads the store's saved document:
//!
//! ```json
//! {
//!   "schoolData": { "name": "", "address": "", "examPeriod": "" },
//!   "examsData": {
//!     "examDays": ["Mon", "Tue"],
//!     "periods": ["P1"],
//!     "subjects": { "P1": ["math"] },
//!     "rooms": [{ "id": 1, "name": "Hall A" }],
//!     "teachers": [{ "name": "A", "subject": "math" }]
//!   },
//!   "roomAssignments": [{ "roomId": 1, "roomName": "Hall A", "day": "Mon", "period": "P1", "assignedTeachers": [] }],
//!   "coordinators": { "math": "A" },
//!   "autoRules": { "requiredPerRoom": 1, "restDays": 0, "maxGuardPeriods": "all" }
//! }
//! ```
//!
//! The store records a room's day and period on its assignment row, so a
//! room without its own day/period takes them from the matching
//! `roomAssignments` entry. Every section is optional.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::GuardError;
use crate::models::{ExamPlan, GuardRules, GuardSchedule, Room, RoomAssignment, Teacher};
use crate::scheduler::{GuardScheduler, GuardStats};
use crate::validation::{normalize_snapshot, validate_snapshot};

/// School details carried for report headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolInfo {
    /// School name.
    pub name: String,
    /// School address.
    pub address: String,
    /// Exam session label (e.g. "June 2026 finals").
    pub exam_period: String,
}

/// Read-only input of one guard run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardSnapshot {
    /// School details.
    #[serde(default)]
    pub school: SchoolInfo,
    /// Teacher roster, in rotation order.
    pub teachers: Vec<Teacher>,
    /// Rooms, in staffing order.
    pub rooms: Vec<Room>,
    /// Exam calendar.
    #[serde(default)]
    pub plan: ExamPlan,
    /// Distribution rules.
    #[serde(default)]
    pub rules: GuardRules,
}

/// Result of distributing guards for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    /// Room assignments.
    pub schedule: GuardSchedule,
    /// Per-teacher duty counts derived from `schedule`.
    pub stats: GuardStats,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredDocument {
    school_data: SchoolInfo,
    exams_data: StoredExams,
    room_assignments: Vec<RoomAssignment>,
    coordinators: HashMap<String, String>,
    auto_rules: GuardRules,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredExams {
    exam_days: Vec<String>,
    periods: Vec<String>,
    subjects: HashMap<String, Vec<String>>,
    rooms: Vec<Room>,
    teachers: Vec<Teacher>,
}

impl GuardSnapshot {
    /// Creates a snapshot.
    pub fn new(teachers: Vec<Teacher>, rooms: Vec<Room>, plan: ExamPlan, rules: GuardRules) -> Self {
        Self {
            school: SchoolInfo::default(),
            teachers,
            rooms,
            plan,
            rules,
        }
    }

    /// Sets the school details.
    pub fn with_school(mut self, school: SchoolInfo) -> Self {
        self.school = school;
        self
    }

    /// Reads a snapshot from the roster store's saved document.
    ///
    /// Names are normalized (see [`normalize_snapshot`]) so padded entries
    /// still match between rooms and the exam plan. The result is not yet
    /// validated; see [`Self::validated`].
    pub fn from_json(json: &str) -> Result<Self, GuardError> {
        let doc: StoredDocument = serde_json::from_str(json)?;
        let mut snapshot = Self::from_document(doc);
        normalize_snapshot(&mut snapshot);
        Ok(snapshot)
    }

    fn from_document(doc: StoredDocument) -> Self {
        let StoredDocument {
            school_data,
            exams_data,
            room_assignments,
            coordinators,
            auto_rules,
        } = doc;

        let by_room: HashMap<u32, &RoomAssignment> =
            room_assignments.iter().map(|a| (a.room_id, a)).collect();

        let rooms = exams_data
            .rooms
            .into_iter()
            .map(|mut room| {
                if let Some(stored) = by_room.get(&room.id) {
                    if room.day.is_none() {
                        room.day = stored.day.clone();
                    }
                    if room.period.is_none() {
                        room.period = stored.period.clone();
                    }
                }
                room
            })
            .collect();

        let plan = ExamPlan {
            exam_days: exams_data.exam_days,
            periods: exams_data.periods,
            period_subjects: exams_data.subjects,
            coordinators,
        };

        Self {
            school: school_data,
            teachers: exams_data.teachers,
            rooms,
            plan,
            rules: auto_rules,
        }
    }

    /// Normalizes and validates the snapshot.
    ///
    /// # Errors
    /// [`GuardError::InvalidSnapshot`] with every detected issue.
    pub fn validated(mut self) -> Result<Self, GuardError> {
        normalize_snapshot(&mut self);
        validate_snapshot(&self).map_err(GuardError::InvalidSnapshot)?;
        Ok(self)
    }

    /// Runs the guard engine and derives duty statistics.
    pub fn distribute(&self) -> Result<Distribution, GuardError> {
        let schedule = GuardScheduler::schedule_snapshot(self)?;
        let stats = GuardStats::calculate(&schedule, &self.teachers);
        Ok(Distribution { schedule, stats })
    }
}
