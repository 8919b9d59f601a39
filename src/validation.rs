//! Input validation for guard runs.
//!
//! The engine assumes well-formed input. This module is the boundary
//! check the roster store runs before handing a snapshot over. Detects:
//! - Empty or duplicate teacher names
//! - Duplicate room IDs
//! - Rooms referencing days or periods missing from the exam plan
//! - Coordinators that are not on the roster
//! - A zero guards-per-room rule
//!
//! [`normalize_snapshot`] fixes the issues that have an unambiguous
//! repair (case, whitespace, blank fields) before validation.

use std::collections::{HashMap, HashSet};

use crate::models::non_blank;
use crate::snapshot::GuardSnapshot;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A teacher has an empty name.
    EmptyTeacherName,
    /// Two teachers share the same name.
    DuplicateTeacher,
    /// Two rooms share the same ID.
    DuplicateRoomId,
    /// A room's day is not an exam day.
    UnknownDay,
    /// A room's period is not a known period.
    UnknownPeriod,
    /// A coordinator is not on the teacher roster.
    UnknownCoordinator,
    /// `requiredPerRoom` is zero.
    InvalidRequiredPerRoom,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a guard snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(snapshot: &GuardSnapshot) -> ValidationResult {
    let mut errors = Vec::new();
    let plan = &snapshot.plan;

    // Collect teacher names
    let mut teacher_names = HashSet::new();
    for (i, teacher) in snapshot.teachers.iter().enumerate() {
        if teacher.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTeacherName,
                format!("Teacher #{} has an empty name", i + 1),
            ));
            continue;
        }
        if !teacher_names.insert(teacher.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeacher,
                format!("Duplicate teacher name: {}", teacher.name),
            ));
        }
    }

    // Collect room IDs, check day and period references
    let mut room_ids = HashSet::new();
    for room in &snapshot.rooms {
        if !room_ids.insert(room.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRoomId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }

        if let Some(day) = room.day() {
            if plan.day_ordinal(day).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!("Room '{}' references unknown exam day '{day}'", room.name),
                ));
            }
        }

        if let Some(period) = room.period() {
            let known = plan.periods.iter().any(|p| p == period)
                || plan.period_subjects.contains_key(period);
            if !known {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPeriod,
                    format!("Room '{}' references unknown period '{period}'", room.name),
                ));
            }
        }
    }

    // Check coordinators against the roster
    let mut coordinators: Vec<(&String, &String)> = plan.coordinators.iter().collect();
    coordinators.sort();
    for (subject, name) in coordinators {
        if !teacher_names.contains(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCoordinator,
                format!("Coordinator '{name}' of subject '{subject}' is not a registered teacher"),
            ));
        }
    }

    // Check rules
    if snapshot.rules.required_per_room == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRequiredPerRoom,
            "requiredPerRoom must be at least 1",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Normalizes a snapshot in place.
///
/// - Trims teacher names, room days and periods; blank days/periods become unset.
/// - Trims exam days, periods and period-subject keys, dropping blanks and repeats.
/// - Lower-cases teacher subjects, period subjects and coordinator subjects.
/// - Registers periods that only appear as subject-map keys.
/// - Raises `requiredPerRoom` to at least 1.
pub fn normalize_snapshot(snapshot: &mut GuardSnapshot) {
    for teacher in &mut snapshot.teachers {
        teacher.name = teacher.name.trim().to_string();
        teacher.subject = teacher.subject.trim().to_lowercase();
    }

    for room in &mut snapshot.rooms {
        room.day = room.day.take().and_then(non_blank);
        room.period = room.period.take().and_then(non_blank);
    }

    // Plan names are matched against the trimmed room fields above.
    let plan = &mut snapshot.plan;
    plan.exam_days = trimmed_unique(std::mem::take(&mut plan.exam_days));
    plan.periods = trimmed_unique(std::mem::take(&mut plan.periods));

    let mut period_subjects: HashMap<String, Vec<String>> = HashMap::new();
    for (period, subjects) in std::mem::take(&mut plan.period_subjects) {
        let Some(period) = non_blank(period) else {
            continue;
        };
        let entry = period_subjects.entry(period).or_default();
        for subject in subjects {
            let subject = subject.trim().to_lowercase();
            if !subject.is_empty() && !entry.contains(&subject) {
                entry.push(subject);
            }
        }
    }
    plan.period_subjects = period_subjects;

    let mut extra: Vec<String> = plan
        .period_subjects
        .keys()
        .filter(|p| !plan.periods.contains(p))
        .cloned()
        .collect();
    extra.sort();
    plan.periods.extend(extra);

    plan.coordinators = std::mem::take(&mut plan.coordinators)
        .into_iter()
        .map(|(subject, name)| (subject.trim().to_lowercase(), name.trim().to_string()))
        .collect();

    snapshot.rules.required_per_room = snapshot.rules.required_per_room.max(1);
}

/// Trims names, dropping blanks and later repeats.
fn trimmed_unique(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names.into_iter().filter_map(non_blank) {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}
