//! Candidate eligibility rules.
//!
//! Each rule rejects a candidate teacher for one guard slot. Rules are
//! checked in a fixed order and the first failing rule is reported:
//!
//! 1. Coordinator exclusion (`excludeSubjectTeacher`)
//! 2. Load ceiling (`maxGuardPeriods`)
//! 3. Rest interval (`restDays`)
//! 4. Already guarding this room
//!
//! The checks are pure: they read the candidate's running load and the
//! room being staffed, and never mutate either.

use std::fmt;

use crate::models::{DayOrdinal, ExamPlan, GuardRules, RoomAssignment, Teacher};

/// Running duty record of one teacher during a guard run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeacherLoad {
    /// Slots accepted so far.
    pub guards: usize,
    /// Ordinal of the most recent dated duty. `None` = no dated duty yet.
    pub last_day: Option<DayOrdinal>,
}

impl TeacherLoad {
    /// Records an accepted slot on `day`.
    ///
    /// Undated rooms count towards the load but leave the last day as is.
    pub fn record(&mut self, day: Option<DayOrdinal>) {
        self.guards += 1;
        if day.is_some() {
            self.last_day = day;
        }
    }
}

/// Why a candidate was rejected for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Candidate coordinates a subject examined in the room's period.
    CoordinatorOfExam { period: String },
    /// Candidate has reached the per-teacher duty ceiling.
    LoadCeiling { ceiling: usize },
    /// Candidate's last duty is within the rest interval of the room's day.
    RestInterval { last: DayOrdinal, current: DayOrdinal },
    /// Candidate already holds a slot in this room.
    AlreadyInRoom,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinatorOfExam { period } => {
                write!(f, "coordinates a subject examined in period {period}")
            }
            Self::LoadCeiling { ceiling } => write!(f, "reached duty ceiling of {ceiling}"),
            Self::RestInterval { last, current } => write!(
                f,
                "rest interval: last duty on day #{}, room on day #{}",
                last.0, current.0
            ),
            Self::AlreadyInRoom => f.write_str("already guarding this room"),
        }
    }
}

/// Rule evaluator bound to one run's rules and exam plan.
#[derive(Debug, Clone, Copy)]
pub struct Eligibility<'a> {
    rules: &'a GuardRules,
    plan: &'a ExamPlan,
    ceiling: Option<usize>,
}

impl<'a> Eligibility<'a> {
    /// Creates an evaluator for a run.
    pub fn new(rules: &'a GuardRules, plan: &'a ExamPlan) -> Self {
        Self {
            rules,
            plan,
            ceiling: rules.load_ceiling(plan.day_count()),
        }
    }

    /// Effective per-teacher duty ceiling (`None` = unlimited).
    pub fn ceiling(&self) -> Option<usize> {
        self.ceiling
    }

    /// Checks a candidate for the next slot of `room`.
    ///
    /// `room_day` is the room's day ordinal, resolved once per room by the
    /// caller.
    pub fn check(
        &self,
        candidate: &Teacher,
        load: &TeacherLoad,
        room: &RoomAssignment,
        room_day: Option<DayOrdinal>,
    ) -> Result<(), Rejection> {
        if self.rules.exclude_subject_teacher {
            if let Some(period) = room.period.as_deref() {
                if self.plan.coordinates_in_period(&candidate.name, period) {
                    return Err(Rejection::CoordinatorOfExam {
                        period: period.to_string(),
                    });
                }
            }
        }

        if let Some(ceiling) = self.ceiling {
            if load.guards >= ceiling {
                return Err(Rejection::LoadCeiling { ceiling });
            }
        }

        if self.rules.rest_days > 0 {
            if let (Some(last), Some(current)) = (load.last_day, room_day) {
                if last.distance(current) <= self.rules.rest_days {
                    return Err(Rejection::RestInterval { last, current });
                }
            }
        }

        if room.has_guard(&candidate.name) {
            return Err(Rejection::AlreadyInRoom);
        }

        Ok(())
    }
}
