//! Daily substitution: purging stale cover records and filling gaps.
//!
//! Runs once per day against the generated grid and live attendance.
//! Absence is the lack of an attendance record; a teacher who checks in
//! after being marked covered invalidates their cover records, which the
//! purge step removes. The fill step then allocates an eligible, free,
//! present substitute to every remaining uncovered duty of every absent
//! teaching-role staff member. An empty candidate pool leaves the duty
//! uncovered: the gap is visible only as the absence of a record.

use rand::Rng;
use tracing::debug;

use crate::models::{AttendanceRecord, SubstitutionRecord, Teacher, TimetableEntry};

/// Result of one fill pass: the full replacement record set plus counters.
#[derive(Debug, Clone)]
pub struct FillOutcome {
    /// Surviving records (all dates) plus the newly created ones.
    pub records: Vec<SubstitutionRecord>,
    /// Number of duties newly covered in this pass.
    pub filled: usize,
    /// Number of stale records removed by the purge step.
    pub purged: usize,
}

/// Removes records for `date` whose absent teacher is present again.
///
/// Records for other dates pass through untouched. Idempotent: a second
/// run with unchanged attendance removes nothing further.
pub fn purge_stale(
    records: &[SubstitutionRecord],
    attendance: &[AttendanceRecord],
    date: &str,
) -> Vec<SubstitutionRecord> {
    records
        .iter()
        .filter(|r| {
            r.date != date
                || !attendance
                    .iter()
                    .any(|a| a.date == date && a.user_id == r.absent_teacher_id)
        })
        .cloned()
        .collect()
}

/// Runs the daily substitution pass for `date` falling on `day_name`.
///
/// A teacher is absent when they hold a teaching role and have no
/// attendance record for the date. For each of their uncovered duties on
/// `day_name`, the candidate pool is every present staff member whose role
/// covers the duty's wing, who has no regular duty of their own at that
/// slot, and who is not already substituting in that slot (existing record
/// or one created earlier in this pass). One candidate is picked uniformly
/// at random via the injected generator.
#[allow(clippy::too_many_arguments)]
pub fn fill_substitutions<R: Rng>(
    date: &str,
    day_name: &str,
    timetable: &[TimetableEntry],
    roster: &[Teacher],
    attendance: &[AttendanceRecord],
    records: &[SubstitutionRecord],
    rng: &mut R,
) -> FillOutcome {
    let surviving = purge_stale(records, attendance, date);
    let purged = records.len() - surviving.len();

    let present: Vec<&str> = attendance
        .iter()
        .filter(|a| a.date == date)
        .map(|a| a.user_id.as_str())
        .collect();

    let absentees: Vec<&Teacher> = roster
        .iter()
        .filter(|t| t.role.is_teaching() && !present.contains(&t.id.as_str()))
        .collect();

    debug!(date, day_name, absentees = absentees.len(), purged, "starting substitution pass");

    let mut new_records: Vec<SubstitutionRecord> = Vec::new();

    for absent in &absentees {
        let duties = timetable
            .iter()
            .filter(|e| e.teacher_id == absent.id && e.day == day_name);

        for duty in duties {
            let already_covered = surviving
                .iter()
                .any(|r| r.covers(date, &absent.id, duty.slot_id, &duty.class_name));
            if already_covered {
                continue;
            }

            let candidates: Vec<&Teacher> = roster
                .iter()
                .filter(|sub| {
                    if !present.contains(&sub.id.as_str()) {
                        return false;
                    }
                    if !sub.role.covers_wing(duty.wing) {
                        return false;
                    }
                    let has_own_duty = timetable.iter().any(|e| {
                        e.teacher_id == sub.id && e.day == day_name && e.slot_id == duty.slot_id
                    });
                    if has_own_duty {
                        return false;
                    }
                    let already_subbing = new_records
                        .iter()
                        .chain(surviving.iter().filter(|r| r.date == date))
                        .any(|r| r.substitute_teacher_id == sub.id && r.slot_id == duty.slot_id);
                    !already_subbing
                })
                .collect();

            if candidates.is_empty() {
                continue; // silent gap
            }
            let pick = candidates[rng.random_range(0..candidates.len())];

            new_records.push(SubstitutionRecord {
                date: date.to_string(),
                slot_id: duty.slot_id,
                class_name: duty.class_name.clone(),
                subject: duty.subject.clone(),
                absent_teacher_id: absent.id.clone(),
                absent_teacher_name: absent.name.clone(),
                substitute_teacher_id: pick.id.clone(),
                substitute_teacher_name: pick.name.clone(),
                wing: duty.wing,
            });
        }
    }

    let filled = new_records.len();
    debug!(filled, "substitution pass done");

    let mut records = surviving;
    records.extend(new_records);
    FillOutcome {
        records,
        filled,
        purged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryOrigin, StaffRole, SubjectCategory, Wing};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DATE: &str = "2026-03-01";
    const DAY: &str = "Sunday";

    fn duty(class: &str, teacher: &str, day: &str, slot: u8, wing: Wing) -> TimetableEntry {
        TimetableEntry {
            class_name: class.into(),
            day: day.into(),
            slot_id: slot,
            wing,
            subject: "Mathematics".into(),
            subject_category: SubjectCategory::Core,
            teacher_id: teacher.into(),
            teacher_name: "T".into(),
            origin: EntryOrigin::GeneralFill,
        }
    }

    fn record(absent: &str, substitute: &str, slot: u8, class: &str, date: &str) -> SubstitutionRecord {
        SubstitutionRecord {
            date: date.into(),
            slot_id: slot,
            class_name: class.into(),
            subject: "Mathematics".into(),
            absent_teacher_id: absent.into(),
            absent_teacher_name: "A".into(),
            substitute_teacher_id: substitute.into(),
            substitute_teacher_name: "S".into(),
            wing: Wing::Primary,
        }
    }

    fn primary(id: &str, name: &str) -> Teacher {
        Teacher::new(id, format!("emp-{id}"), name, StaffRole::TeacherPrimary)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(17)
    }

    #[test]
    fn test_purge_removes_records_for_present_teachers() {
        let records = vec![record("t1", "t2", 3, "IV A", DATE)];
        let attendance = vec![AttendanceRecord::new("t1", DATE)];
        let survivors = purge_stale(&records, &attendance, DATE);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_purge_keeps_other_dates() {
        let records = vec![record("t1", "t2", 3, "IV A", "2026-02-28")];
        let attendance = vec![AttendanceRecord::new("t1", DATE)];
        let survivors = purge_stale(&records, &attendance, DATE);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn test_purge_is_idempotent() {
        let records = vec![
            record("t1", "t2", 3, "IV A", DATE),
            record("t3", "t2", 4, "IV B", DATE),
        ];
        let attendance = vec![AttendanceRecord::new("t1", DATE)];
        let once = purge_stale(&records, &attendance, DATE);
        let twice = purge_stale(&once, &attendance, DATE);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].absent_teacher_id, "t3");
    }

    #[test]
    fn test_fill_covers_absent_teacher_duty() {
        let roster = vec![primary("t1", "Absent"), primary("t2", "Present")];
        let timetable = vec![duty("IV A", "t1", DAY, 3, Wing::Primary)];
        let attendance = vec![AttendanceRecord::new("t2", DATE)];

        let outcome =
            fill_substitutions(DATE, DAY, &timetable, &roster, &attendance, &[], &mut rng());
        assert_eq!(outcome.filled, 1);
        let rec = &outcome.records[0];
        assert_eq!(rec.absent_teacher_id, "t1");
        assert_eq!(rec.substitute_teacher_id, "t2");
        assert_eq!(rec.slot_id, 3);
        assert_eq!(rec.class_name, "IV A");
    }

    #[test]
    fn test_absent_substitutes_are_not_candidates() {
        // t2 is also absent: nobody can cover, the duty stays open.
        let roster = vec![primary("t1", "Absent"), primary("t2", "Also Absent")];
        let timetable = vec![duty("IV A", "t1", DAY, 3, Wing::Primary)];

        let outcome = fill_substitutions(DATE, DAY, &timetable, &roster, &[], &[], &mut rng());
        assert_eq!(outcome.filled, 0);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_wing_incompatible_roles_excluded() {
        let roster = vec![
            primary("t1", "Absent"),
            Teacher::new("t2", "emp-t2", "Secondary", StaffRole::TeacherSecondary),
        ];
        let timetable = vec![duty("IV A", "t1", DAY, 3, Wing::Primary)];
        let attendance = vec![AttendanceRecord::new("t2", DATE)];

        let outcome =
            fill_substitutions(DATE, DAY, &timetable, &roster, &attendance, &[], &mut rng());
        assert_eq!(outcome.filled, 0);
    }

    #[test]
    fn test_busy_substitutes_excluded() {
        // t2 teaches their own class at the duty's slot.
        let roster = vec![primary("t1", "Absent"), primary("t2", "Busy")];
        let timetable = vec![
            duty("IV A", "t1", DAY, 3, Wing::Primary),
            duty("IV B", "t2", DAY, 3, Wing::Primary),
        ];
        let attendance = vec![AttendanceRecord::new("t2", DATE)];

        let outcome =
            fill_substitutions(DATE, DAY, &timetable, &roster, &attendance, &[], &mut rng());
        assert_eq!(outcome.filled, 0);
    }

    #[test]
    fn test_no_double_substitution_in_same_slot() {
        // Two absent teachers both hold a slot-3 duty; only one present
        // substitute exists, so only one duty gets covered.
        let roster = vec![
            primary("t1", "Absent One"),
            primary("t2", "Absent Two"),
            primary("t3", "Only Sub"),
        ];
        let timetable = vec![
            duty("IV A", "t1", DAY, 3, Wing::Primary),
            duty("IV B", "t2", DAY, 3, Wing::Primary),
        ];
        let attendance = vec![AttendanceRecord::new("t3", DATE)];

        let outcome =
            fill_substitutions(DATE, DAY, &timetable, &roster, &attendance, &[], &mut rng());
        assert_eq!(outcome.filled, 1);
    }

    #[test]
    fn test_existing_cover_not_duplicated() {
        let roster = vec![primary("t1", "Absent"), primary("t2", "Present")];
        let timetable = vec![duty("IV A", "t1", DAY, 3, Wing::Primary)];
        let attendance = vec![AttendanceRecord::new("t2", DATE)];
        let existing = vec![record("t1", "t2", 3, "IV A", DATE)];

        let outcome = fill_substitutions(
            DATE, DAY, &timetable, &roster, &attendance, &existing, &mut rng(),
        );
        assert_eq!(outcome.filled, 0);
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn test_returning_teacher_frees_cover_then_gap_refilled() {
        // t1's cover is stale (t1 checked in); t3 is genuinely absent and
        // gets a fresh record.
        let roster = vec![
            primary("t1", "Returned"),
            primary("t2", "Present"),
            primary("t3", "Absent"),
        ];
        let timetable = vec![duty("IV A", "t3", DAY, 5, Wing::Primary)];
        let attendance = vec![
            AttendanceRecord::new("t1", DATE),
            AttendanceRecord::new("t2", DATE),
        ];
        let existing = vec![record("t1", "t2", 3, "IV A", DATE)];

        let outcome = fill_substitutions(
            DATE, DAY, &timetable, &roster, &attendance, &existing, &mut rng(),
        );
        assert_eq!(outcome.purged, 1);
        assert_eq!(outcome.filled, 1);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].absent_teacher_id, "t3");
    }

    #[test]
    fn test_duties_on_other_days_ignored() {
        let roster = vec![primary("t1", "Absent"), primary("t2", "Present")];
        let timetable = vec![duty("IV A", "t1", "Monday", 3, Wing::Primary)];
        let attendance = vec![AttendanceRecord::new("t2", DATE)];

        let outcome =
            fill_substitutions(DATE, DAY, &timetable, &roster, &attendance, &[], &mut rng());
        assert_eq!(outcome.filled, 0);
    }

    #[test]
    fn test_management_roles_not_scanned_for_absence() {
        // An absent incharge generates no gaps even with grid duties.
        let roster = vec![
            Teacher::new("t1", "emp-t1", "Incharge", StaffRole::InchargePrimary),
            primary("t2", "Present"),
        ];
        let timetable = vec![duty("IV A", "t1", DAY, 3, Wing::Primary)];
        let attendance = vec![AttendanceRecord::new("t2", DATE)];

        let outcome =
            fill_substitutions(DATE, DAY, &timetable, &roster, &attendance, &[], &mut rng());
        assert_eq!(outcome.filled, 0);
    }

    #[test]
    fn test_seeded_fill_is_reproducible() {
        let roster = vec![
            primary("t1", "Absent"),
            primary("t2", "Sub A"),
            primary("t3", "Sub B"),
            primary("t4", "Sub C"),
        ];
        let timetable = vec![
            duty("IV A", "t1", DAY, 2, Wing::Primary),
            duty("IV B", "t1", DAY, 4, Wing::Primary),
        ];
        let attendance = vec![
            AttendanceRecord::new("t2", DATE),
            AttendanceRecord::new("t3", DATE),
            AttendanceRecord::new("t4", DATE),
        ];

        let a = fill_substitutions(
            DATE, DAY, &timetable, &roster, &attendance, &[], &mut StdRng::seed_from_u64(5),
        );
        let b = fill_substitutions(
            DATE, DAY, &timetable, &roster, &attendance, &[], &mut StdRng::seed_from_u64(5),
        );
        assert_eq!(a.records, b.records);
        assert_eq!(a.filled, 2);
    }
}
