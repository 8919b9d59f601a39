//! Guard rotation engine and duty statistics.
//!
//! # Algorithm
//!
//! `GuardScheduler` walks the roster with a single round-robin cursor and
//! rejects candidates that break an eligibility rule (coordinator
//! exclusion, load ceiling, rest interval, duplicate in room). It is not
//! an optimizer: fairness comes from the rotation order alone.
//!
//! # Statistics
//!
//! `GuardStats` derives per-teacher duty counts and unfilled-slot totals
//! from a schedule.

mod eligibility;
mod rotation;
mod stats;

pub use eligibility::{Eligibility, Rejection, TeacherLoad};
pub use rotation::{assign, GuardScheduler};
pub use stats::{GuardLoad, GuardStats};
