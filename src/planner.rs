//! Three-phase greedy weekly timetable generation.
//!
//! # Algorithm
//!
//! 1. **Homeroom pass** — every class teacher takes slot 1 of each day in
//!    their own class, preferring their core-subject loads.
//! 2. **Synchronized blocks** — the four non-core categories are placed at
//!    the same (day, slot) across every sibling section of a grade, each
//!    section with a distinct teacher, committed atomically per block.
//! 3. **General fill** — remaining empty cells are filled greedily, ranking
//!    candidate teachers by total outstanding load with pseudo-random
//!    tie-breaking.
//!
//! Pinned manual entries are carried through untouched: they seed the
//! occupancy index and discount the load pool, and the output is always a
//! full replacement entry set (manual + generated). An exhausted candidate
//! pool leaves a cell empty rather than failing the pass.
//!
//! Randomness is injected: callers pass any [`rand::Rng`], so a seeded
//! [`rand::rngs::StdRng`] makes planning runs reproducible.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::availability::AvailabilityIndex;
use crate::models::{
    ClassSection, EntryOrigin, Subject, SubjectCategory, Teacher, TeacherAssignment,
    TimetableEntry, Wing, SCHOOL_DAYS,
};
use crate::pool::{LoadPool, PoolLoad};

/// The fixed homeroom ordinal for the class-teacher pass.
const HOMEROOM_SLOT: u8 = 1;

/// Highest teaching slot ordinal across all wings.
const MAX_TEACHING_SLOT: u8 = 9;

/// Input container for one planning pass.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// All class sections.
    pub classes: Vec<ClassSection>,
    /// Staff roster (class-teacher links and display names).
    pub roster: Vec<Teacher>,
    /// Subject catalog (category resolution).
    pub subjects: Vec<Subject>,
    /// Per-grade subject quotas.
    pub assignments: Vec<TeacherAssignment>,
    /// The current grid; only its MANUAL-origin subset is consumed.
    pub existing_entries: Vec<TimetableEntry>,
}

/// Three-phase greedy timetable planner.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use timetabler::models::*;
/// use timetabler::planner::{PlanRequest, Planner};
///
/// let request = PlanRequest {
///     classes: vec![ClassSection::new("c1", "IV A", Wing::Primary)],
///     roster: vec![
///         Teacher::new("t1", "emp101", "Mohammed Ali", StaffRole::TeacherPrimary)
///             .with_class("IV A"),
///     ],
///     subjects: vec![Subject::new("s1", "Mathematics", SubjectCategory::Core)],
///     assignments: vec![TeacherAssignment::new("t1", "Grade IV").with_load("Mathematics", 5)],
///     existing_entries: vec![],
/// };
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = Planner::new().generate(&request, &mut rng);
/// assert_eq!(grid.len(), 5); // one homeroom period per school day
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    days: Vec<String>,
}

impl Planner {
    /// Creates a planner over the standard school week.
    pub fn new() -> Self {
        Self {
            days: SCHOOL_DAYS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Overrides the ordered week-day list.
    pub fn with_days(mut self, days: Vec<String>) -> Self {
        self.days = days;
        self
    }

    /// Runs one full planning pass.
    ///
    /// Returns the full replacement entry set: every MANUAL entry from the
    /// request, unchanged, followed by the newly generated entries. All
    /// previously generated (non-manual) entries are discarded and
    /// recomputed.
    pub fn generate<R: Rng>(&self, request: &PlanRequest, rng: &mut R) -> Vec<TimetableEntry> {
        let manual: Vec<TimetableEntry> = request
            .existing_entries
            .iter()
            .filter(|e| e.is_manual())
            .cloned()
            .collect();

        let mut entries = manual.clone();
        let mut index = AvailabilityIndex::seeded_from(&manual);
        let mut pool = LoadPool::build(
            &request.assignments,
            &request.subjects,
            &request.roster,
            &manual,
        );

        debug!(
            classes = request.classes.len(),
            pool_entries = pool.entries().len(),
            pinned = manual.len(),
            "starting planning pass"
        );

        let before = entries.len();
        self.place_homerooms(request, &mut pool, &mut index, &mut entries);
        debug!(placed = entries.len() - before, "homeroom pass done");

        let before = entries.len();
        self.place_synchronized_blocks(request, &mut pool, &mut index, &mut entries);
        debug!(placed = entries.len() - before, "synchronized blocks done");

        let before = entries.len();
        self.fill_remaining(request, &mut pool, &mut index, &mut entries, rng);
        debug!(placed = entries.len() - before, "general fill done");

        entries
    }

    /// Phase A: class-teacher homeroom periods at slot 1.
    fn place_homerooms(
        &self,
        request: &PlanRequest,
        pool: &mut LoadPool,
        index: &mut AvailabilityIndex,
        entries: &mut Vec<TimetableEntry>,
    ) {
        for class in &request.classes {
            let Some(class_teacher) = request
                .roster
                .iter()
                .find(|t| t.class_teacher_of.as_deref() == Some(class.name.as_str()))
            else {
                continue;
            };

            let grade = class.grade();
            let Some(pos) = pool.position(&class_teacher.id, &grade) else {
                continue;
            };

            for day in &self.days {
                if !index.class_free(&class.name, day, HOMEROOM_SLOT)
                    || !index.teacher_free(&class_teacher.id, day, HOMEROOM_SLOT)
                {
                    continue;
                }

                let pool_entry = &mut pool.entries_mut()[pos];
                let Some(load_idx) = best_homeroom_load(&pool_entry.loads) else {
                    continue;
                };
                let load = &mut pool_entry.loads[load_idx];

                entries.push(TimetableEntry {
                    class_name: class.name.clone(),
                    day: day.clone(),
                    slot_id: HOMEROOM_SLOT,
                    wing: class.wing,
                    subject: load.subject.clone(),
                    subject_category: load.category,
                    teacher_id: class_teacher.id.clone(),
                    teacher_name: class_teacher.name.clone(),
                    origin: EntryOrigin::ClassTeacherAuto,
                });
                load.remaining -= 1;
                index.mark(&class_teacher.id, &class.name, day, HOMEROOM_SLOT);
            }
        }
    }

    /// Phase B: cross-section synchronized blocks for non-core categories.
    fn place_synchronized_blocks(
        &self,
        request: &PlanRequest,
        pool: &mut LoadPool,
        index: &mut AvailabilityIndex,
        entries: &mut Vec<TimetableEntry>,
    ) {
        // Sibling sections per grade, in class-catalog order.
        let mut grade_sections: Vec<(String, Vec<String>)> = Vec::new();
        for class in &request.classes {
            let grade = class.grade();
            match grade_sections.iter_mut().find(|(g, _)| *g == grade) {
                Some((_, sections)) => sections.push(class.name.clone()),
                None => grade_sections.push((grade, vec![class.name.clone()])),
            }
        }

        for (grade, sections) in &grade_sections {
            for category in SubjectCategory::SYNCHRONIZED {
                let periods_needed = sections
                    .iter()
                    .map(|section| {
                        pool.entries()
                            .iter()
                            .filter(|p| p.grade == *grade && p.applies_to(section))
                            .map(|p| p.remaining_in(category))
                            .sum::<u32>()
                    })
                    .max()
                    .unwrap_or(0);

                if periods_needed == 0 {
                    continue;
                }

                let mut scheduled = 0u32;
                for slot_id in 2..=MAX_TEACHING_SLOT {
                    if scheduled >= periods_needed {
                        break;
                    }
                    for day in &self.days {
                        if scheduled >= periods_needed {
                            break;
                        }
                        if let Some(picks) =
                            self.block_picks(pool, index, grade, sections, category, day, slot_id)
                        {
                            self.commit_block(
                                request, pool, index, entries, &picks, category, day, slot_id,
                            );
                            scheduled += 1;
                        }
                    }
                }
            }
        }
    }

    /// Finds a distinct free teacher for every sibling section at a cell.
    ///
    /// Returns one (section, pool index) pick per section, or `None` if any
    /// section cannot be served — in which case nothing is committed for
    /// this (day, slot).
    #[allow(clippy::too_many_arguments)]
    fn block_picks(
        &self,
        pool: &LoadPool,
        index: &AvailabilityIndex,
        grade: &str,
        sections: &[String],
        category: SubjectCategory,
        day: &str,
        slot_id: u8,
    ) -> Option<Vec<(String, usize)>> {
        let mut picks = Vec::with_capacity(sections.len());
        let mut used_teachers: HashSet<&str> = HashSet::new();

        for section in sections {
            if !index.class_free(section, day, slot_id) {
                return None;
            }
            // TODO: compare the section's wing tag instead of the class-name
            // prefix once the intended cutoff behavior is confirmed; Phase C
            // already checks the wing tag.
            if section.starts_with('P') && slot_id > 8 {
                return None;
            }

            let found = pool.entries().iter().position(|p| {
                p.grade == grade
                    && p.applies_to(section)
                    && !used_teachers.contains(p.teacher_id.as_str())
                    && p.has_remaining_in(category)
                    && index.teacher_free(&p.teacher_id, day, slot_id)
            })?;

            used_teachers.insert(pool.entries()[found].teacher_id.as_str());
            picks.push((section.clone(), found));
        }

        Some(picks)
    }

    /// Commits one synchronized block: one entry per sibling section.
    #[allow(clippy::too_many_arguments)]
    fn commit_block(
        &self,
        request: &PlanRequest,
        pool: &mut LoadPool,
        index: &mut AvailabilityIndex,
        entries: &mut Vec<TimetableEntry>,
        picks: &[(String, usize)],
        category: SubjectCategory,
        day: &str,
        slot_id: u8,
    ) {
        for (section, pool_idx) in picks {
            let pool_entry = &mut pool.entries_mut()[*pool_idx];
            let Some(load) = pool_entry
                .loads
                .iter_mut()
                .find(|l| l.category == category && l.remaining > 0)
            else {
                continue;
            };

            let wing = request
                .classes
                .iter()
                .find(|c| c.name == *section)
                .map(|c| c.wing)
                .unwrap_or(Wing::Primary);

            entries.push(TimetableEntry {
                class_name: section.clone(),
                day: day.to_string(),
                slot_id,
                wing,
                subject: load.subject.clone(),
                subject_category: category,
                teacher_id: pool_entry.teacher_id.clone(),
                teacher_name: pool_entry.teacher_name.clone(),
                origin: EntryOrigin::SynchronizedBlock,
            });
            load.remaining -= 1;

            let teacher_id = pool_entry.teacher_id.clone();
            index.mark(&teacher_id, section, day, slot_id);
        }
    }

    /// Phase C: greedy fill of every remaining empty cell.
    fn fill_remaining<R: Rng>(
        &self,
        request: &PlanRequest,
        pool: &mut LoadPool,
        index: &mut AvailabilityIndex,
        entries: &mut Vec<TimetableEntry>,
        rng: &mut R,
    ) {
        for slot_id in 1..=MAX_TEACHING_SLOT {
            for day in &self.days {
                for class in &request.classes {
                    if !index.class_free(&class.name, day, slot_id) {
                        continue;
                    }
                    if !class.wing.has_slot(slot_id) {
                        continue;
                    }

                    let grade = class.grade();
                    // Rank by total outstanding load, ties broken randomly.
                    let mut candidates: Vec<(usize, u32, f64)> = pool
                        .entries()
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| {
                            p.grade == grade
                                && p.applies_to(&class.name)
                                && p.total_remaining() > 0
                                && index.teacher_free(&p.teacher_id, day, slot_id)
                        })
                        .map(|(i, p)| (i, p.total_remaining(), rng.random::<f64>()))
                        .collect();
                    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.total_cmp(&b.2)));

                    let Some(&(pool_idx, _, _)) = candidates.first() else {
                        continue;
                    };

                    let pool_entry = &mut pool.entries_mut()[pool_idx];
                    let Some(load_idx) = richest_load(&pool_entry.loads) else {
                        continue;
                    };
                    let load = &mut pool_entry.loads[load_idx];

                    entries.push(TimetableEntry {
                        class_name: class.name.clone(),
                        day: day.clone(),
                        slot_id,
                        wing: class.wing,
                        subject: load.subject.clone(),
                        subject_category: load.category,
                        teacher_id: pool_entry.teacher_id.clone(),
                        teacher_name: pool_entry.teacher_name.clone(),
                        origin: EntryOrigin::GeneralFill,
                    });
                    load.remaining -= 1;

                    let teacher_id = pool_entry.teacher_id.clone();
                    index.mark(&teacher_id, &class.name, day, slot_id);
                }
            }
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Best load for a homeroom period: core category first, then highest
/// remaining; earlier loads win ties.
fn best_homeroom_load(loads: &[PoolLoad]) -> Option<usize> {
    let key = |l: &PoolLoad| (l.category == SubjectCategory::Core, l.remaining);
    let mut best: Option<usize> = None;
    for (i, load) in loads.iter().enumerate() {
        if load.remaining == 0 {
            continue;
        }
        match best {
            None => best = Some(i),
            Some(b) if key(load) > key(&loads[b]) => best = Some(i),
            Some(_) => {}
        }
    }
    best
}

/// Load with the highest remaining count; earlier loads win ties.
fn richest_load(loads: &[PoolLoad]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, load) in loads.iter().enumerate() {
        if load.remaining == 0 {
            continue;
        }
        match best {
            None => best = Some(i),
            Some(b) if load.remaining > loads[b].remaining => best = Some(i),
            Some(_) => {}
        }
    }
    best
}
