//! Guard schedule (solution) model.
//!
//! A guard schedule holds one [`RoomAssignment`] per exam room, in room
//! input order. Each assignment carries an ordered list of guard slots;
//! a slot the engine could not fill is [`GuardSlot::Unfilled`].
//!
//! The schedule is produced whole by the rotation engine and may then be
//! edited room by room through [`GuardSchedule::set_manual`], which applies
//! no eligibility rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::room::blank_as_none;
use super::Room;
use crate::error::GuardError;

/// Text shown (and persisted) for a slot with no eligible teacher.
pub const UNFILLED_SLOT_TEXT: &str = "no eligible teacher found";

/// One guard slot of a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GuardSlot {
    /// Slot held by the named teacher.
    Teacher(String),
    /// No eligible teacher was found for this slot.
    Unfilled,
}

impl GuardSlot {
    /// Creates a slot for a teacher name.
    pub fn teacher(name: impl Into<String>) -> Self {
        Self::Teacher(name.into())
    }

    /// Teacher name, if the slot is filled.
    pub fn teacher_name(&self) -> Option<&str> {
        match self {
            Self::Teacher(name) => Some(name),
            Self::Unfilled => None,
        }
    }

    /// Whether the slot is filled.
    #[inline]
    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Teacher(_))
    }
}

impl From<String> for GuardSlot {
    fn from(s: String) -> Self {
        if s == UNFILLED_SLOT_TEXT {
            Self::Unfilled
        } else {
            Self::Teacher(s)
        }
    }
}

impl From<&str> for GuardSlot {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<GuardSlot> for String {
    fn from(slot: GuardSlot) -> Self {
        match slot {
            GuardSlot::Teacher(name) => name,
            GuardSlot::Unfilled => UNFILLED_SLOT_TEXT.to_string(),
        }
    }
}

impl fmt::Display for GuardSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teacher(name) => f.write_str(name),
            Self::Unfilled => f.write_str(UNFILLED_SLOT_TEXT),
        }
    }
}

/// Guards assigned to one exam room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAssignment {
    /// Room identifier.
    pub room_id: u32,
    /// Room name (denormalized for display).
    pub room_name: String,
    /// Exam day of the room.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub day: Option<String>,
    /// Exam period of the room.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub period: Option<String>,
    /// Guard slots in slot order.
    #[serde(rename = "assignedTeachers", default)]
    pub guards: Vec<GuardSlot>,
}

impl RoomAssignment {
    /// Creates an empty assignment for a room.
    pub fn for_room(room: &Room) -> Self {
        Self {
            room_id: room.id,
            room_name: room.name.clone(),
            day: room.day.clone(),
            period: room.period.clone(),
            guards: Vec::new(),
        }
    }

    /// Whether the named teacher holds a slot in this room.
    pub fn has_guard(&self, name: &str) -> bool {
        self.guards.iter().any(|g| g.teacher_name() == Some(name))
    }

    /// Names of the teachers holding slots, in slot order.
    pub fn guard_names(&self) -> impl Iterator<Item = &str> {
        self.guards.iter().filter_map(GuardSlot::teacher_name)
    }

    /// Number of unfilled slots.
    pub fn unfilled_count(&self) -> usize {
        self.guards.iter().filter(|g| !g.is_filled()).count()
    }

    /// Whether every slot is filled.
    pub fn is_fully_staffed(&self) -> bool {
        self.unfilled_count() == 0
    }
}

/// Complete room → guards assignment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuardSchedule {
    /// Assignments in room input order.
    pub rooms: Vec<RoomAssignment>,
}

impl GuardSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule with one empty assignment per room.
    pub fn for_rooms(rooms: &[Room]) -> Self {
        Self {
            rooms: rooms.iter().map(RoomAssignment::for_room).collect(),
        }
    }

    /// Appends a room assignment.
    pub fn add_room(&mut self, assignment: RoomAssignment) {
        self.rooms.push(assignment);
    }

    /// Finds the assignment for a room.
    pub fn assignment_for_room(&self, room_id: u32) -> Option<&RoomAssignment> {
        self.rooms.iter().find(|r| r.room_id == room_id)
    }

    /// Ids of the rooms a teacher guards, in room order.
    pub fn rooms_for_teacher(&self, name: &str) -> Vec<u32> {
        self.rooms
            .iter()
            .filter(|r| r.has_guard(name))
            .map(|r| r.room_id)
            .collect()
    }

    /// Room ids in schedule order.
    pub fn room_ids(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.room_id).collect()
    }

    /// Total number of unfilled slots.
    pub fn unfilled_slots(&self) -> usize {
        self.rooms.iter().map(RoomAssignment::unfilled_count).sum()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Replaces the guard list of one room, bypassing all eligibility rules.
    ///
    /// Names equal to [`UNFILLED_SLOT_TEXT`] are stored as
    /// [`GuardSlot::Unfilled`]. Every other room is left untouched.
    ///
    /// # Errors
    /// [`GuardError::UnknownRoom`] if no assignment has `room_id`.
    pub fn set_manual<I, S>(&mut self, room_id: u32, names: I) -> Result<&RoomAssignment, GuardError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.room_id == room_id)
            .ok_or(GuardError::UnknownRoom { room_id })?;

        room.guards = names
            .into_iter()
            .map(|n| GuardSlot::from(n.into()))
            .collect();

        tracing::debug!(room_id, guards = room.guards.len(), "manual guard override");
        Ok(room)
    }
}
