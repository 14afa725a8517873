//! Quota reconciliation after manual timetable edits.
//!
//! A manual cell consumes quota: if an operator pins more periods of a
//! subject than the teacher's recorded quota covers, the quota is raised to
//! match. Reconciliation only ever raises quotas — deleting manual entries
//! never lowers an administrator-configured value.

use tracing::debug;

use crate::models::{grade_of, SubjectLoad, TeacherAssignment, TimetableEntry};

/// Recomputes the manual consumption of (teacher, grade, subject) and
/// raises the matching quota to cover it.
///
/// - No assignment for the (teacher, grade) pair: one is created with a
///   single load of `periods = manual count`.
/// - Subject missing from the assignment: appended with the manual count.
/// - Subject present: `periods = max(periods, manual count)`.
///
/// Call after every manual cell write or deletion, passing the full
/// post-edit grid.
pub fn reconcile_manual_load(
    assignments: &mut Vec<TeacherAssignment>,
    teacher_id: &str,
    grade: &str,
    subject: &str,
    entries: &[TimetableEntry],
) {
    let manual_count = entries
        .iter()
        .filter(|e| {
            e.is_manual()
                && e.teacher_id == teacher_id
                && grade_of(&e.class_name) == grade
                && e.subject == subject
        })
        .count() as u32;

    let Some(assignment) = assignments
        .iter_mut()
        .find(|a| a.teacher_id == teacher_id && a.grade == grade)
    else {
        debug!(teacher_id, grade, subject, manual_count, "creating assignment from manual entries");
        assignments.push(TeacherAssignment::new(teacher_id, grade).with_load(subject, manual_count));
        return;
    };

    match assignment.loads.iter_mut().find(|l| l.subject == subject) {
        Some(load) => load.periods = load.periods.max(manual_count),
        None => assignment.loads.push(SubjectLoad::new(subject, manual_count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryOrigin, SubjectCategory, Wing};

    fn manual(class: &str, teacher: &str, subject: &str, slot: u8) -> TimetableEntry {
        TimetableEntry {
            class_name: class.into(),
            day: "Sunday".into(),
            slot_id: slot,
            wing: Wing::Primary,
            subject: subject.into(),
            subject_category: SubjectCategory::Core,
            teacher_id: teacher.into(),
            teacher_name: "T".into(),
            origin: EntryOrigin::Manual,
        }
    }

    #[test]
    fn test_creates_missing_assignment() {
        let mut assignments = vec![];
        let grid = vec![manual("IV A", "t1", "Mathematics", 2)];
        reconcile_manual_load(&mut assignments, "t1", "Grade IV", "Mathematics", &grid);

        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].id, "t1-Grade IV");
        assert_eq!(assignments[0].loads, vec![SubjectLoad::new("Mathematics", 1)]);
    }

    #[test]
    fn test_appends_new_subject() {
        let mut assignments = vec![TeacherAssignment::new("t1", "Grade IV").with_load("Science", 4)];
        let grid = vec![
            manual("IV A", "t1", "Mathematics", 2),
            manual("IV B", "t1", "Mathematics", 3),
        ];
        reconcile_manual_load(&mut assignments, "t1", "Grade IV", "Mathematics", &grid);

        assert_eq!(assignments[0].loads.len(), 2);
        assert_eq!(assignments[0].loads[1], SubjectLoad::new("Mathematics", 2));
    }

    #[test]
    fn test_raises_quota_to_manual_count() {
        let mut assignments =
            vec![TeacherAssignment::new("t1", "Grade IV").with_load("Mathematics", 1)];
        let grid = vec![
            manual("IV A", "t1", "Mathematics", 2),
            manual("IV A", "t1", "Mathematics", 3),
            manual("IV B", "t1", "Mathematics", 4),
        ];
        reconcile_manual_load(&mut assignments, "t1", "Grade IV", "Mathematics", &grid);
        assert_eq!(assignments[0].loads[0].periods, 3);
    }

    #[test]
    fn test_never_lowers_configured_quota() {
        // Quota 6, then the last manual entry is deleted: the recount is 0
        // but the configured 6 stands.
        let mut assignments =
            vec![TeacherAssignment::new("t1", "Grade IV").with_load("Mathematics", 6)];
        reconcile_manual_load(&mut assignments, "t1", "Grade IV", "Mathematics", &[]);
        assert_eq!(assignments[0].loads[0].periods, 6);
    }

    #[test]
    fn test_quota_monotonic_across_invocations() {
        let mut assignments = vec![];
        let grid3 = vec![
            manual("IV A", "t1", "Mathematics", 2),
            manual("IV A", "t1", "Mathematics", 3),
            manual("IV A", "t1", "Mathematics", 4),
        ];
        let grid1 = vec![manual("IV A", "t1", "Mathematics", 2)];

        reconcile_manual_load(&mut assignments, "t1", "Grade IV", "Mathematics", &grid3);
        assert_eq!(assignments[0].loads[0].periods, 3);

        // Two manual entries removed: quota stays at its high-water mark.
        reconcile_manual_load(&mut assignments, "t1", "Grade IV", "Mathematics", &grid1);
        assert_eq!(assignments[0].loads[0].periods, 3);
    }

    #[test]
    fn test_non_manual_entries_not_counted() {
        let mut generated = manual("IV A", "t1", "Mathematics", 2);
        generated.origin = EntryOrigin::GeneralFill;

        let mut assignments = vec![];
        reconcile_manual_load(&mut assignments, "t1", "Grade IV", "Mathematics", &[generated]);
        assert_eq!(assignments[0].loads[0].periods, 0);
    }

    #[test]
    fn test_other_grades_untouched() {
        let mut assignments = vec![
            TeacherAssignment::new("t1", "Grade V").with_load("Mathematics", 9),
        ];
        let grid = vec![manual("IV A", "t1", "Mathematics", 2)];
        reconcile_manual_load(&mut assignments, "t1", "Grade IV", "Mathematics", &grid);

        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].grade, "Grade V");
        assert_eq!(assignments[0].loads[0].periods, 9);
    }
}
