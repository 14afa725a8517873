//! Structural integrity checks for a generated timetable grid.
//!
//! A well-formed grid never double-books a teacher and never stacks two
//! entries into the same class cell. Collisions where both entries are
//! pinned manual cells are exempt: the operator confirmed those through
//! the conflict dialog, so the grid carries them as authorized overrides.

use std::collections::HashMap;

use crate::models::TimetableEntry;

/// Validation result.
pub type ValidationResult = Result<(), Vec<GridViolation>>;

/// A structural violation found in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridViolation {
    /// Violation category.
    pub kind: GridViolationKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of grid violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridViolationKind {
    /// One teacher holds two different classes in the same cell.
    TeacherDoubleBooked,
    /// One class cell holds two different entries.
    RoomDoubleBooked,
}

impl GridViolation {
    fn new(kind: GridViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a full grid for double bookings.
///
/// Checks:
/// 1. No teacher appears in two classes at the same (day, slot)
/// 2. No class holds two entries at the same (day, slot)
///
/// A collision is exempt when both entries involved are manual: those
/// passed through an explicit operator override.
///
/// # Returns
/// `Ok(())` if the grid is clean, `Err(violations)` with all detected issues.
pub fn validate_grid(entries: &[TimetableEntry]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_cells: HashMap<(&str, &str, u8), &TimetableEntry> = HashMap::new();
    for entry in entries {
        let key = (entry.teacher_id.as_str(), entry.day.as_str(), entry.slot_id);
        if let Some(prior) = teacher_cells.get(&key) {
            if prior.class_name != entry.class_name
                && !(prior.is_manual() && entry.is_manual())
            {
                errors.push(GridViolation::new(
                    GridViolationKind::TeacherDoubleBooked,
                    format!(
                        "{} holds both {} and {} on {} slot {}",
                        entry.teacher_name, prior.class_name, entry.class_name,
                        entry.day, entry.slot_id
                    ),
                ));
            }
        } else {
            teacher_cells.insert(key, entry);
        }
    }

    let mut class_cells: HashMap<(&str, &str, u8), &TimetableEntry> = HashMap::new();
    for entry in entries {
        let key = (entry.class_name.as_str(), entry.day.as_str(), entry.slot_id);
        if let Some(prior) = class_cells.get(&key) {
            if prior.teacher_id != entry.teacher_id
                && !(prior.is_manual() && entry.is_manual())
            {
                errors.push(GridViolation::new(
                    GridViolationKind::RoomDoubleBooked,
                    format!(
                        "Class {} holds both {} and {} on {} slot {}",
                        entry.class_name, prior.teacher_name, entry.teacher_name,
                        entry.day, entry.slot_id
                    ),
                ));
            }
        } else {
            class_cells.insert(key, entry);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
