//! Advisory gates for manual timetable edits.
//!
//! Neither gate blocks a write: both return findings the caller must put to
//! the operator for an explicit override before committing.

use serde::{Deserialize, Serialize};

use crate::models::{total_periods_with, SubjectLoad, TeacherAssignment, TimetableEntry};

/// Weekly period cap per teacher; exceeding it is allowed with an override.
pub const WEEKLY_PERIOD_CAP: u32 = 28;

/// Category of a detected scheduling conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// The teacher already holds a period elsewhere at this cell.
    Teacher,
    /// The class is already occupied by another teacher at this cell.
    Room,
}

/// A detected conflict, with a message ready for the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// What kind of collision was found.
    pub kind: ConflictKind,
    /// Human-readable description naming the conflicting occupant.
    pub message: String,
}

/// A proposed single-cell manual edit.
#[derive(Debug, Clone)]
pub struct EditProposal<'a> {
    /// Teacher being placed.
    pub teacher_id: &'a str,
    /// Class being edited.
    pub class_name: &'a str,
    /// Week day of the cell.
    pub day: &'a str,
    /// Teaching slot ordinal of the cell.
    pub slot_id: u8,
}

/// Checks a proposed edit against the current grid.
///
/// Reports at most one conflict: the teacher's other engagement at that
/// cell first, otherwise the class's other occupant. Returns `None` when
/// the cell is clean.
pub fn detect_conflict(entries: &[TimetableEntry], proposal: &EditProposal<'_>) -> Option<Conflict> {
    if let Some(other) = entries.iter().find(|e| {
        e.teacher_id == proposal.teacher_id
            && e.day == proposal.day
            && e.slot_id == proposal.slot_id
            && e.class_name != proposal.class_name
    }) {
        return Some(Conflict {
            kind: ConflictKind::Teacher,
            message: format!(
                "Conflict: {} is already assigned to Class {} during this period.",
                other.teacher_name, other.class_name
            ),
        });
    }

    if let Some(other) = entries.iter().find(|e| {
        e.class_name == proposal.class_name
            && e.day == proposal.day
            && e.slot_id == proposal.slot_id
            && e.teacher_id != proposal.teacher_id
    }) {
        return Some(Conflict {
            kind: ConflictKind::Room,
            message: format!(
                "Conflict: Room {} is already occupied by {} during this period.",
                other.class_name, other.teacher_name
            ),
        });
    }

    None
}

/// An advisory weekly-load warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadAlert {
    /// The total that would result from the edit.
    pub total_periods: u32,
    /// Human-readable description for the confirmation dialog.
    pub message: String,
}

/// Checks a teacher's resulting weekly total against [`WEEKLY_PERIOD_CAP`].
///
/// `proposed` replaces the teacher's loads for `grade`; quotas recorded for
/// other grades are kept. Returns `None` when the total stays within the
/// cap.
pub fn weekly_load_alert(
    assignments: &[TeacherAssignment],
    teacher_id: &str,
    grade: &str,
    proposed: &[SubjectLoad],
) -> Option<LoadAlert> {
    let total = total_periods_with(assignments, teacher_id, grade, proposed);
    if total <= WEEKLY_PERIOD_CAP {
        return None;
    }
    Some(LoadAlert {
        total_periods: total,
        message: format!(
            "Load Alert: Resulting workload of {total} periods exceeds the standard \
             {WEEKLY_PERIOD_CAP}-period weekly limit. Do you wish to authorize this \
             manual override?"
        ),
    })
}
