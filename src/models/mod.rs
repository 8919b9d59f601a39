//! Guard assignment domain models.
//!
//! Provides the data types exchanged with the roster store: the inputs of
//! a guard run (teachers, rooms, exam plan, rules) and its output (the
//! guard schedule).
//!
//! # Domain Mappings
//!
//! | u-proctor | Scheduling term | School office |
//! |-----------|-----------------|---------------|
//! | Teacher | Resource | Guard / proctor |
//! | Room | Task | Exam room sitting |
//! | ExamPlan | Calendar | Exam timetable |
//! | GuardRules | Constraint set | Distribution rules |
//! | GuardSchedule | Schedule | Guard roster sheet |

mod assignment;
mod exam_plan;
mod room;
mod rules;
mod teacher;

pub use assignment::{GuardSchedule, GuardSlot, RoomAssignment, UNFILLED_SLOT_TEXT};
pub use exam_plan::{DayOrdinal, ExamPlan};
pub use room::Room;
pub(crate) use room::non_blank;
pub use rules::{GuardRules, MaxGuardPeriods};
pub use teacher::Teacher;
