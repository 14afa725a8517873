//! Timetable entries and their provenance.

use serde::{Deserialize, Serialize};

use super::{SubjectCategory, Wing};

/// Provenance of a timetable entry.
///
/// `Manual` entries are operator input: they survive every regeneration and
/// are never produced by the planner. The other three variants are destroyed
/// and recomputed on every planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryOrigin {
    /// Pinned by a human edit.
    Manual,
    /// Phase A: class teacher's homeroom period.
    ClassTeacherAuto,
    /// Phase B: cross-section synchronized block.
    SynchronizedBlock,
    /// Phase C: general fill.
    GeneralFill,
}

/// One cell of the weekly grid.
///
/// Keyed by (`class_name`, `day`, `slot_id`); the planner also guarantees
/// uniqueness per (`teacher_id`, `day`, `slot_id`) among generated entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Class this period belongs to.
    pub class_name: String,
    /// Week day name.
    pub day: String,
    /// Teaching slot ordinal.
    pub slot_id: u8,
    /// Wing of the class.
    pub wing: Wing,
    /// Subject name.
    pub subject: String,
    /// Category of the subject.
    pub subject_category: SubjectCategory,
    /// Assigned teacher.
    pub teacher_id: String,
    /// Teacher display name, denormalized for rendering.
    pub teacher_name: String,
    /// How this entry came to exist.
    pub origin: EntryOrigin,
}

impl TimetableEntry {
    /// Whether this entry was pinned by a human edit.
    pub fn is_manual(&self) -> bool {
        self.origin == EntryOrigin::Manual
    }

    /// Whether this entry occupies the given cell.
    pub fn at(&self, class_name: &str, day: &str, slot_id: u8) -> bool {
        self.class_name == class_name && self.day == day && self.slot_id == slot_id
    }
}
