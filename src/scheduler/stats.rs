//! Guard duty statistics.
//!
//! Derived view over a guard schedule: how many guard slots each teacher
//! holds, and how many stayed empty. Always recomputed from the
//! schedule alone, never stored as a source of truth.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Load | Slots naming the teacher |
//! | Total guards | Sum of all loads |
//! | Unfilled slots | Slots holding the sentinel |
//! | Understaffed rooms | Rooms with at least one unfilled slot |
//! | Load spread | max(load) − min(load) over the roster |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{GuardSchedule, Teacher};

/// Duty count of one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardLoad {
    /// Teacher name.
    pub name: String,
    /// Guard slots held.
    pub slots: usize,
    /// Whether the name is on the roster (manual edits may add others).
    pub on_roster: bool,
}

/// Guard statistics for a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuardStats {
    /// Per-teacher loads: roster order first, then off-roster names in
    /// first-seen order.
    pub loads: Vec<GuardLoad>,
    /// Slots left unfilled.
    pub unfilled_slots: usize,
    /// Ids of rooms with at least one unfilled slot, in room order.
    pub understaffed_rooms: Vec<u32>,
}

impl GuardStats {
    /// Computes statistics from a schedule and the teacher roster.
    ///
    /// Every roster teacher appears, with zero if unassigned. Every
    /// non-sentinel slot counts, so a name listed twice in one room (after
    /// a manual edit) counts twice.
    pub fn calculate(schedule: &GuardSchedule, teachers: &[Teacher]) -> Self {
        let mut loads: Vec<GuardLoad> = teachers
            .iter()
            .map(|t| GuardLoad {
                name: t.name.clone(),
                slots: 0,
                on_roster: true,
            })
            .collect();
        let mut index: HashMap<String, usize> = loads
            .iter()
            .enumerate()
            .map(|(i, l)| (l.name.clone(), i))
            .collect();

        let mut unfilled_slots = 0;
        let mut understaffed_rooms = Vec::new();

        for room in &schedule.rooms {
            for name in room.guard_names() {
                let idx = *index.entry(name.to_string()).or_insert_with(|| {
                    loads.push(GuardLoad {
                        name: name.to_string(),
                        slots: 0,
                        on_roster: false,
                    });
                    loads.len() - 1
                });
                loads[idx].slots += 1;
            }

            let unfilled = room.unfilled_count();
            if unfilled > 0 {
                unfilled_slots += unfilled;
                understaffed_rooms.push(room.room_id);
            }
        }

        Self {
            loads,
            unfilled_slots,
            understaffed_rooms,
        }
    }

    /// Guard slots held by a teacher (0 if unknown).
    pub fn count(&self, name: &str) -> usize {
        self.loads
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.slots)
            .unwrap_or(0)
    }

    /// Sum of all loads.
    pub fn total_guards(&self) -> usize {
        self.loads.iter().map(|l| l.slots).sum()
    }

    /// Smallest load among roster teachers.
    pub fn min_load(&self) -> Option<usize> {
        self.roster_loads().min()
    }

    /// Largest load among roster teachers.
    pub fn max_load(&self) -> Option<usize> {
        self.roster_loads().max()
    }

    /// Difference between the largest and smallest roster load.
    pub fn load_spread(&self) -> usize {
        match (self.min_load(), self.max_load()) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }

    /// Roster teachers with no duty.
    pub fn idle_teachers(&self) -> Vec<&str> {
        self.loads
            .iter()
            .filter(|l| l.on_roster && l.slots == 0)
            .map(|l| l.name.as_str())
            .collect()
    }

    /// Whether every slot in the schedule is filled.
    pub fn is_fully_staffed(&self) -> bool {
        self.unfilled_slots == 0
    }

    fn roster_loads(&self) -> impl Iterator<Item = usize> + '_ {
        self.loads.iter().filter(|l| l.on_roster).map(|l| l.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GuardSlot, Room};

    fn sample() -> (GuardSchedule, Vec<Teacher>) {
        let teachers = vec![
            Teacher::new("A", "math"),
            Teacher::new("B", "physics"),
            Teacher::new("C", "history"),
        ];
        let rooms = vec![Room::new(1, "R1"), Room::new(2, "R2"), Room::new(3, "R3")];
        let mut s = GuardSchedule::for_rooms(&rooms);
        s.rooms[0].guards = vec![GuardSlot::teacher("A"), GuardSlot::teacher("B")];
        s.rooms[1].guards = vec![GuardSlot::teacher("A"), GuardSlot::Unfilled];
        s.rooms[2].guards = vec![GuardSlot::Unfilled, GuardSlot::Unfilled];
        (s, teachers)
    }

    #[test]
    fn test_counts_include_zero() {
        let (s, t) = sample();
        let stats = GuardStats::calculate(&s, &t);
        assert_eq!(stats.count("A"), 2);
        assert_eq!(stats.count("B"), 1);
        assert_eq!(stats.count("C"), 0);
        assert_eq!(stats.loads.len(), 3);
        assert_eq!(stats.idle_teachers(), ["C"]);
    }

    #[test]
    fn test_totals_and_unfilled() {
        let (s, t) = sample();
        let stats = GuardStats::calculate(&s, &t);
        assert_eq!(stats.total_guards(), 3);
        assert_eq!(stats.unfilled_slots, 3);
        assert_eq!(stats.understaffed_rooms, vec![2, 3]);
        assert!(!stats.is_fully_staffed());
    }

    #[test]
    fn test_fairness_metrics() {
        let (s, t) = sample();
        let stats = GuardStats::calculate(&s, &t);
        assert_eq!(stats.min_load(), Some(0));
        assert_eq!(stats.max_load(), Some(2));
        assert_eq!(stats.load_spread(), 2);
    }

    #[test]
    fn test_off_roster_names_appended() {
        let (mut s, t) = sample();
        s.set_manual(3, ["Z", "A"]).unwrap();
        let stats = GuardStats::calculate(&s, &t);

        let last = stats.loads.last().unwrap();
        assert_eq!(last.name, "Z");
        assert!(!last.on_roster);
        assert_eq!(stats.count("A"), 3);
        // Off-roster names do not affect roster fairness metrics.
        assert_eq!(stats.max_load(), Some(3));
        assert_eq!(stats.min_load(), Some(0));
    }

    #[test]
    fn test_duplicate_in_room_counts_each_slot() {
        let (mut s, t) = sample();
        s.set_manual(1, ["B", "B"]).unwrap();
        let stats = GuardStats::calculate(&s, &t);
        assert_eq!(stats.count("B"), 2);

        let filled: usize = s.rooms.iter().map(|r| r.guard_names().count()).sum();
        assert_eq!(stats.total_guards(), filled);
        assert_eq!(stats.total_guards(), 3);
    }

    #[test]
    fn test_empty() {
        let stats = GuardStats::calculate(&GuardSchedule::new(), &[]);
        assert_eq!(stats.total_guards(), 0);
        assert_eq!(stats.min_load(), None);
        assert_eq!(stats.load_spread(), 0);
        assert!(stats.is_fully_staffed());
    }
}
