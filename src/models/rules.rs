//! Automatic distribution rules.
//!
//! The rule set configures which candidates the rotation engine rejects.
//! Field names serialise in camelCase and unknown/missing fields fall back
//! to the defaults below, so a rule object saved by the roster store loads
//! unchanged.
//!
//! | Field | Default | Effect |
//! |-------|---------|--------|
//! | `requiredPerRoom` | 1 | Guard slots per room |
//! | `excludeSubjectTeacher` | true | Coordinators skip their subject's period |
//! | `fairDistribution` | true | Advisory; rotation order already spreads load |
//! | `restDays` | 0 | Minimum day gap between two guard duties |
//! | `maxGuardPeriods` | `"all"` | Per-teacher load ceiling mode |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-teacher load ceiling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxGuardPeriods {
    /// No ceiling.
    #[default]
    All,
    /// At most as many duties as there are exam days.
    OneDay,
    /// At most one duty in the whole run.
    OnePeriod,
}

impl fmt::Display for MaxGuardPeriods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::OneDay => "one_day",
            Self::OnePeriod => "one_period",
        };
        f.write_str(s)
    }
}

/// Rule set for automatic guard distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardRules {
    /// Guards required in every room (≥ 1).
    pub required_per_room: usize,
    /// Reject coordinators for rooms examining their coordinated subject.
    pub exclude_subject_teacher: bool,
    /// Advisory fairness flag. Not enforced beyond rotation order.
    pub fair_distribution: bool,
    /// Minimum day-ordinal gap between two duties of the same teacher.
    pub rest_days: usize,
    /// Per-teacher load ceiling mode.
    pub max_guard_periods: MaxGuardPeriods,
}

impl Default for GuardRules {
    fn default() -> Self {
        Self {
            required_per_room: 1,
            exclude_subject_teacher: true,
            fair_distribution: true,
            rest_days: 0,
            max_guard_periods: MaxGuardPeriods::All,
        }
    }
}

impl GuardRules {
    /// Creates the default rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of guards per room (clamped to ≥ 1).
    pub fn with_required_per_room(mut self, n: usize) -> Self {
        self.required_per_room = n.max(1);
        self
    }

    /// Enables or disables coordinator exclusion.
    pub fn with_exclude_subject_teacher(mut self, enabled: bool) -> Self {
        self.exclude_subject_teacher = enabled;
        self
    }

    /// Sets the advisory fairness flag.
    pub fn with_fair_distribution(mut self, enabled: bool) -> Self {
        self.fair_distribution = enabled;
        self
    }

    /// Sets the rest interval in days.
    pub fn with_rest_days(mut self, days: usize) -> Self {
        self.rest_days = days;
        self
    }

    /// Sets the load ceiling mode.
    pub fn with_max_guard_periods(mut self, mode: MaxGuardPeriods) -> Self {
        self.max_guard_periods = mode;
        self
    }

    /// Maximum number of duties per teacher for a plan with
    /// `exam_day_count` days. `None` = unlimited.
    ///
    /// Any mode other than `All` is capped at the number of exam days;
    /// `OnePeriod` is additionally capped at one.
    pub fn load_ceiling(&self, exam_day_count: usize) -> Option<usize> {
        match self.max_guard_periods {
            MaxGuardPeriods::All => None,
            MaxGuardPeriods::OneDay => Some(exam_day_count),
            MaxGuardPeriods::OnePeriod => Some(exam_day_count.min(1)),
        }
    }
}
