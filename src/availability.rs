//! Single-pass occupancy tracking for teachers and classes.
//!
//! During one planning pass the index records which (teacher, day, slot)
//! and (class, day, slot) cells are taken. It is seeded from the pinned
//! manual entries and updated as the planner commits new ones. The index
//! lives for exactly one pass and is never persisted.

use std::collections::HashSet;

use crate::models::TimetableEntry;

/// Composite occupancy key: one entity at one cell of the week.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CellKey {
    entity: String,
    day: String,
    slot_id: u8,
}

impl CellKey {
    fn new(entity: &str, day: &str, slot_id: u8) -> Self {
        Self {
            entity: entity.to_string(),
            day: day.to_string(),
            slot_id,
        }
    }
}

/// Occupancy index over one planning pass.
#[derive(Debug, Default)]
pub struct AvailabilityIndex {
    teachers: HashSet<CellKey>,
    classes: HashSet<CellKey>,
}

impl AvailabilityIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the index from existing entries (typically the manual subset).
    pub fn seeded_from(entries: &[TimetableEntry]) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.occupy(entry);
        }
        index
    }

    /// Whether a teacher is free at the given cell.
    pub fn teacher_free(&self, teacher_id: &str, day: &str, slot_id: u8) -> bool {
        !self.teachers.contains(&CellKey::new(teacher_id, day, slot_id))
    }

    /// Whether a class is free at the given cell.
    pub fn class_free(&self, class_name: &str, day: &str, slot_id: u8) -> bool {
        !self.classes.contains(&CellKey::new(class_name, day, slot_id))
    }

    /// Marks both the entry's teacher and class busy at its cell.
    pub fn occupy(&mut self, entry: &TimetableEntry) {
        self.mark(&entry.teacher_id, &entry.class_name, &entry.day, entry.slot_id);
    }

    /// Marks a (teacher, class) pair busy at a cell.
    pub fn mark(&mut self, teacher_id: &str, class_name: &str, day: &str, slot_id: u8) {
        self.teachers.insert(CellKey::new(teacher_id, day, slot_id));
        self.classes.insert(CellKey::new(class_name, day, slot_id));
    }
}
