//! Domain models for school timetabling.
//!
//! Plain serde-derived types shared by every planning component: slot
//! tables per wing, class sections with derived grades, the subject
//! catalog, the staff roster, per-grade load quotas, timetable entries
//! with provenance, and the daily attendance/substitution records.

mod assignment;
mod entry;
mod records;
mod section;
mod slot;
mod staff;
mod subject;

pub use assignment::{total_periods_with, SubjectLoad, TeacherAssignment};
pub use entry::{EntryOrigin, TimetableEntry};
pub use records::{AttendanceRecord, SubstitutionRecord};
pub use section::{grade_of, ClassSection};
pub use slot::{SlotTable, TimeSlot, Wing, SCHOOL_DAYS};
pub use staff::{teacher_name, StaffRole, Teacher};
pub use subject::{category_of, Subject, SubjectCategory};
