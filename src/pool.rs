//! The load pool: remaining weekly periods per (teacher, grade).
//!
//! Built once per planning pass from the teacher assignments, discounted by
//! the periods already consumed by pinned manual entries. The planner
//! decrements `remaining` in place as it commits entries; the pool is
//! discarded at the end of the pass.

use serde::{Deserialize, Serialize};

use crate::models::{
    category_of, grade_of, teacher_name, Subject, SubjectCategory, Teacher, TeacherAssignment,
    TimetableEntry,
};

/// Remaining demand for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolLoad {
    /// Subject name.
    pub subject: String,
    /// Category resolved from the subject catalog.
    pub category: SubjectCategory,
    /// Periods still owed this week.
    pub remaining: u32,
}

/// One teacher's remaining-period ledger for one grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Teacher this ledger belongs to.
    pub teacher_id: String,
    /// Teacher display name.
    pub teacher_name: String,
    /// Grade label.
    pub grade: String,
    /// Remaining demand per subject, in assignment order.
    pub loads: Vec<PoolLoad>,
    /// Section restriction carried over from the assignment.
    pub target_sections: Vec<String>,
}

impl PoolEntry {
    /// Whether this entry may serve the given section.
    ///
    /// An empty restriction applies to every section of the grade.
    pub fn applies_to(&self, section_name: &str) -> bool {
        self.target_sections.is_empty()
            || self.target_sections.iter().any(|s| s == section_name)
    }

    /// Total remaining periods across all loads.
    pub fn total_remaining(&self) -> u32 {
        self.loads.iter().map(|l| l.remaining).sum()
    }

    /// Remaining periods in one category.
    pub fn remaining_in(&self, category: SubjectCategory) -> u32 {
        self.loads
            .iter()
            .filter(|l| l.category == category)
            .map(|l| l.remaining)
            .sum()
    }

    /// Whether any load of the given category still has demand.
    pub fn has_remaining_in(&self, category: SubjectCategory) -> bool {
        self.loads
            .iter()
            .any(|l| l.category == category && l.remaining > 0)
    }
}

/// All pool entries for one planning pass.
#[derive(Debug, Clone, Default)]
pub struct LoadPool {
    entries: Vec<PoolEntry>,
}

impl LoadPool {
    /// Builds the pool from assignments, discounting manual consumption.
    ///
    /// For every load, `remaining = max(0, periods − manual count)` where the
    /// manual count is the number of MANUAL entries matching the teacher,
    /// the load's subject, and the assignment's grade. Subjects missing from
    /// the catalog fall back to the `Core` category; teachers missing from
    /// the roster keep an `"Unknown"` display name.
    pub fn build(
        assignments: &[TeacherAssignment],
        subjects: &[Subject],
        roster: &[Teacher],
        manual_entries: &[TimetableEntry],
    ) -> Self {
        let entries = assignments
            .iter()
            .map(|assignment| {
                let loads = assignment
                    .loads
                    .iter()
                    .map(|load| {
                        let consumed = manual_entries
                            .iter()
                            .filter(|m| {
                                m.teacher_id == assignment.teacher_id
                                    && grade_of(&m.class_name) == assignment.grade
                                    && m.subject == load.subject
                            })
                            .count() as u32;
                        PoolLoad {
                            subject: load.subject.clone(),
                            category: category_of(subjects, &load.subject),
                            remaining: load.periods.saturating_sub(consumed),
                        }
                    })
                    .collect();

                PoolEntry {
                    teacher_id: assignment.teacher_id.clone(),
                    teacher_name: teacher_name(roster, &assignment.teacher_id),
                    grade: assignment.grade.clone(),
                    loads,
                    target_sections: assignment.target_sections.clone(),
                }
            })
            .collect();

        Self { entries }
    }

    /// All entries, in assignment order.
    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    /// Mutable access for in-place decrementing during a pass.
    pub fn entries_mut(&mut self) -> &mut [PoolEntry] {
        &mut self.entries
    }

    /// Index of the ledger for a (teacher, grade) pair.
    pub fn position(&self, teacher_id: &str, grade: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.teacher_id == teacher_id && e.grade == grade)
    }
}
