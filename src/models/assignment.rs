//! Teacher subject-load quotas per grade.

use serde::{Deserialize, Serialize};

/// Weekly period quota for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectLoad {
    /// Subject name.
    pub subject: String,
    /// Periods owed per week.
    pub periods: u32,
}

impl SubjectLoad {
    /// Creates a new load.
    pub fn new(subject: impl Into<String>, periods: u32) -> Self {
        Self {
            subject: subject.into(),
            periods,
        }
    }
}

/// A teacher's subject quotas for one grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherAssignment {
    /// Identifier, conventionally `"{teacher_id}-{grade}"`.
    pub id: String,
    /// Teacher this assignment belongs to.
    pub teacher_id: String,
    /// Grade label (e.g., "Grade IV").
    pub grade: String,
    /// Per-subject weekly quotas.
    pub loads: Vec<SubjectLoad>,
    /// Sections of the grade this assignment applies to.
    /// Empty means every section of the grade.
    pub target_sections: Vec<String>,
}

impl TeacherAssignment {
    /// Creates an assignment for a (teacher, grade) pair.
    pub fn new(teacher_id: impl Into<String>, grade: impl Into<String>) -> Self {
        let teacher_id = teacher_id.into();
        let grade = grade.into();
        Self {
            id: format!("{teacher_id}-{grade}"),
            teacher_id,
            grade,
            loads: Vec::new(),
            target_sections: Vec::new(),
        }
    }

    /// Adds a subject load.
    pub fn with_load(mut self, subject: impl Into<String>, periods: u32) -> Self {
        self.loads.push(SubjectLoad::new(subject, periods));
        self
    }

    /// Restricts the assignment to specific sections.
    pub fn with_target_sections(mut self, sections: Vec<String>) -> Self {
        self.target_sections = sections;
        self
    }

    /// Total weekly periods across all loads.
    pub fn total_periods(&self) -> u32 {
        self.loads.iter().map(|l| l.periods).sum()
    }
}

/// A teacher's total weekly periods with one grade's loads replaced.
///
/// Sums the recorded quotas of every other grade, then adds the proposed
/// loads for `grade`. Used by the weekly-load advisory gate before an edit
/// is committed.
pub fn total_periods_with(
    assignments: &[TeacherAssignment],
    teacher_id: &str,
    grade: &str,
    proposed: &[SubjectLoad],
) -> u32 {
    let others: u32 = assignments
        .iter()
        .filter(|a| a.teacher_id == teacher_id && a.grade != grade)
        .map(|a| a.total_periods())
        .sum();
    others + proposed.iter().map(|l| l.periods).sum::<u32>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_builder() {
        let a = TeacherAssignment::new("t1", "Grade IV")
            .with_load("Mathematics", 6)
            .with_load("Science", 4)
            .with_target_sections(vec!["IV A".into()]);
        assert_eq!(a.id, "t1-Grade IV");
        assert_eq!(a.total_periods(), 10);
        assert_eq!(a.target_sections, vec!["IV A".to_string()]);
    }

    #[test]
    fn test_total_with_replacement() {
        let assignments = vec![
            TeacherAssignment::new("t1", "Grade IV").with_load("Mathematics", 10),
            TeacherAssignment::new("t1", "Grade V").with_load("Science", 8),
            TeacherAssignment::new("t2", "Grade IV").with_load("English", 20),
        ];
        // Replacing the Grade IV loads: 8 (Grade V kept) + 12 proposed.
        let proposed = vec![SubjectLoad::new("Mathematics", 12)];
        assert_eq!(total_periods_with(&assignments, "t1", "Grade IV", &proposed), 20);
    }
}
