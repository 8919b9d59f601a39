//! Exam guard assignment for the U-Engine ecosystem.
//!
//! Staffs exam rooms with teacher guards (proctors) by rotating through
//! the roster and rejecting candidates that break the distribution rules:
//! coordinators of an examined subject, teachers at their duty ceiling,
//! and teachers still inside their rest interval.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Teacher`, `Room`, `ExamPlan`,
//!   `GuardRules`, `GuardSchedule`, `GuardSlot`
//! - **`scheduler`**: Rotation engine (`GuardScheduler`, `assign`),
//!   eligibility rules, duty statistics (`GuardStats`)
//! - **`snapshot`**: Read-only run input, loadable from the roster store's
//!   saved JSON document
//! - **`validation`**: Boundary checks (duplicate names/IDs, unknown
//!   days, periods, coordinators)
//! - **`logging`**: `tracing-subscriber` setup helpers
//!
//! # Example
//!
//! ```
//! use u_proctor::models::{ExamPlan, GuardRules, Room, Teacher};
//! use u_proctor::scheduler::{assign, GuardStats};
//!
//! let teachers = vec![Teacher::new("A", "math"), Teacher::new("B", "physics")];
//! let rooms = vec![
//!     Room::new(1, "Hall A").on_day("Mon").in_period("Morning"),
//!     Room::new(2, "Hall B").on_day("Tue").in_period("Morning"),
//! ];
//! let plan = ExamPlan::new().with_days(["Mon", "Tue"]).with_subject("Morning", "chemistry");
//!
//! let schedule = assign(&teachers, &rooms, &plan, &GuardRules::new()).unwrap();
//! let stats = GuardStats::calculate(&schedule, &teachers);
//! assert_eq!(stats.count("A"), 1);
//! assert_eq!(stats.count("B"), 1);
//! ```

pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod snapshot;
pub mod validation;

pub use error::GuardError;
pub use snapshot::{Distribution, GuardSnapshot, SchoolInfo};
