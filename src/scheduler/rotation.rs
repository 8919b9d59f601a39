//! Rotation-based guard scheduler.
//!
//! # Algorithm
//!
//! Sequential round-robin with rejection sampling:
//!
//! 1. Every teacher starts with zero duties and no last duty day.
//! 2. A single rotation cursor walks the roster for the whole run. It is
//!    shared by all rooms and slots and never reset.
//! 3. For each room (input order) and each of its `requiredPerRoom` slots,
//!    the teacher at `cursor % n` is considered and the cursor advances,
//!    whether the candidate is accepted or not. At most `2n` candidates are
//!    considered per slot.
//! 4. The first candidate passing the [eligibility rules](super::eligibility)
//!    takes the slot. If the budget runs out the slot is left
//!    [`Unfilled`](GuardSlot::Unfilled) and no load changes.
//!
//! The ever-advancing cursor spreads duties across the roster without a
//! separate optimizer; the attempt budget bounds the run to
//! `rooms × slots × 2n` considerations.
//!
//! # Complexity
//! O(r * k * n) where r=rooms, k=guards per room, n=teachers.

use tracing::{debug, info, instrument, trace, warn};

use super::eligibility::{Eligibility, TeacherLoad};
use crate::error::GuardError;
use crate::models::{ExamPlan, GuardRules, GuardSchedule, GuardSlot, Room, RoomAssignment, Teacher};
use crate::snapshot::GuardSnapshot;

/// Per-run accumulator: the rotation cursor and each teacher's load.
///
/// Lives only for the duration of one [`GuardScheduler::schedule`] call.
#[derive(Debug, Clone)]
struct RotationState {
    cursor: usize,
    loads: Vec<TeacherLoad>,
}

impl RotationState {
    /// Creates a fresh state for `teacher_count` teachers, cursor at 0.
    fn new(teacher_count: usize) -> Self {
        Self {
            cursor: 0,
            loads: vec![TeacherLoad::default(); teacher_count],
        }
    }

    /// Total candidates considered so far.
    fn cursor(&self) -> usize {
        self.cursor
    }

    /// Roster index of the next candidate; advances the cursor.
    fn next_candidate(&mut self) -> usize {
        let idx = self.cursor % self.loads.len();
        self.cursor += 1;
        idx
    }
}

/// Rotation-based guard scheduler.
///
/// # Example
///
/// ```
/// use u_proctor::models::{ExamPlan, GuardRules, Room, Teacher};
/// use u_proctor::scheduler::GuardScheduler;
///
/// let teachers = vec![Teacher::new("A", "math"), Teacher::new("B", "physics")];
/// let rooms = vec![Room::new(1, "Hall").on_day("Mon").in_period("P1")];
/// let plan = ExamPlan::new()
///     .with_day("Mon")
///     .with_subject("P1", "math")
///     .with_coordinator("math", "A");
///
/// let scheduler = GuardScheduler::new(GuardRules::new());
/// let schedule = scheduler.schedule(&teachers, &rooms, &plan).unwrap();
/// assert_eq!(schedule.rooms[0].guard_names().collect::<Vec<_>>(), ["B"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GuardScheduler {
    rules: GuardRules,
}

impl GuardScheduler {
    /// Creates a scheduler with the given rules.
    pub fn new(rules: GuardRules) -> Self {
        Self { rules }
    }

    /// Rules in effect.
    pub fn rules(&self) -> &GuardRules {
        &self.rules
    }

    /// Assigns guards to every room.
    ///
    /// Inputs are only read; the returned schedule is built locally and
    /// handed back whole.
    ///
    /// # Errors
    /// [`GuardError::NoTeachers`] / [`GuardError::NoRooms`] if either list
    /// is empty. No partial schedule is produced.
    #[instrument(skip_all, fields(
        teachers = teachers.len(),
        rooms = rooms.len(),
        per_room = self.rules.required_per_room,
    ))]
    pub fn schedule(
        &self,
        teachers: &[Teacher],
        rooms: &[Room],
        plan: &ExamPlan,
    ) -> Result<GuardSchedule, GuardError> {
        if teachers.is_empty() {
            return Err(GuardError::NoTeachers);
        }
        if rooms.is_empty() {
            return Err(GuardError::NoRooms);
        }

        let eligibility = Eligibility::new(&self.rules, plan);
        let mut state = RotationState::new(teachers.len());
        let mut schedule = GuardSchedule::new();

        for room in rooms {
            let assignment = self.staff_room(room, teachers, plan, &eligibility, &mut state);
            schedule.add_room(assignment);
        }

        let unfilled = schedule.unfilled_slots();
        info!(
            slots = rooms.len() * self.rules.required_per_room,
            unfilled,
            considered = state.cursor(),
            fair_distribution = self.rules.fair_distribution,
            "guard distribution complete"
        );

        Ok(schedule)
    }

    /// Assigns guards for a validated input snapshot.
    pub fn schedule_snapshot(snapshot: &GuardSnapshot) -> Result<GuardSchedule, GuardError> {
        Self::new(snapshot.rules.clone()).schedule(
            &snapshot.teachers,
            &snapshot.rooms,
            &snapshot.plan,
        )
    }

    /// Fills every slot of one room, advancing the shared rotation.
    fn staff_room(
        &self,
        room: &Room,
        teachers: &[Teacher],
        plan: &ExamPlan,
        eligibility: &Eligibility<'_>,
        state: &mut RotationState,
    ) -> RoomAssignment {
        let mut assignment = RoomAssignment::for_room(room);
        let room_day = room.day().and_then(|d| plan.day_ordinal(d));
        let budget = teachers.len() * 2;

        for slot in 0..self.rules.required_per_room {
            let mut filled = false;

            for _ in 0..budget {
                let idx = state.next_candidate();
                let candidate = &teachers[idx];

                match eligibility.check(candidate, &state.loads[idx], &assignment, room_day) {
                    Ok(()) => {
                        state.loads[idx].record(room_day);
                        assignment.guards.push(GuardSlot::teacher(candidate.name.as_str()));
                        debug!(room_id = room.id, slot, teacher = %candidate.name, "guard assigned");
                        filled = true;
                        break;
                    }
                    Err(reason) => {
                        trace!(room_id = room.id, slot, teacher = %candidate.name, %reason, "candidate rejected");
                    }
                }
            }

            if !filled {
                warn!(room_id = room.id, room = %room.name, slot, "no eligible teacher found");
                assignment.guards.push(GuardSlot::Unfilled);
            }
        }

        assignment
    }
}

/// Assigns guards with the given rules.
///
/// Shorthand for `GuardScheduler::new(rules.clone()).schedule(..)`.
pub fn assign(
    teachers: &[Teacher],
    rooms: &[Room],
    plan: &ExamPlan,
    rules: &GuardRules,
) -> Result<GuardSchedule, GuardError> {
    GuardScheduler::new(rules.clone()).schedule(teachers, rooms, plan)
}
