//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced to the caller of the guard engine.
///
/// A slot that cannot be filled is not an error: it is recorded as
/// [`GuardSlot::Unfilled`](crate::models::GuardSlot::Unfilled) and the run
/// still succeeds.
#[derive(Error, Debug)]
pub enum GuardError {
    /// The roster is empty; nothing can be distributed.
    #[error("no teachers registered: add teachers and rooms before distributing guards")]
    NoTeachers,

    /// No rooms exist; nothing can be distributed.
    #[error("no rooms registered: add teachers and rooms before distributing guards")]
    NoRooms,

    /// A manual override named a room that is not in the assignment list.
    #[error("room {room_id} is not in the assignment list")]
    UnknownRoom { room_id: u32 },

    /// The snapshot failed boundary validation.
    #[error("invalid snapshot: {}", summarize(.0))]
    InvalidSnapshot(Vec<ValidationError>),

    /// The snapshot document could not be parsed.
    #[error("malformed snapshot document: {0}")]
    Json(#[from] serde_json::Error),
}

impl GuardError {
    /// Whether this error is a precondition failure the administrator can
    /// fix by entering data (as opposed to a caller bug).
    pub fn is_guidance(&self) -> bool {
        matches!(self, Self::NoTeachers | Self::NoRooms)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
