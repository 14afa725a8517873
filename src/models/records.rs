//! Attendance markers and substitution records.

use serde::{Deserialize, Serialize};

use super::Wing;

/// A presence marker: the user checked in on the given date.
///
/// Absence is the lack of a record; there is no explicit absent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Staff member this record belongs to.
    pub user_id: String,
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
}

impl AttendanceRecord {
    /// Creates a presence marker.
    pub fn new(user_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            date: date.into(),
        }
    }
}

/// One covered duty: a substitute standing in for an absent teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRecord {
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    /// Teaching slot ordinal of the covered duty.
    pub slot_id: u8,
    /// Class of the covered duty.
    pub class_name: String,
    /// Subject of the covered duty.
    pub subject: String,
    /// The teacher who is absent.
    pub absent_teacher_id: String,
    /// Display name of the absent teacher.
    pub absent_teacher_name: String,
    /// The teacher standing in.
    pub substitute_teacher_id: String,
    /// Display name of the substitute.
    pub substitute_teacher_name: String,
    /// Wing of the covered class.
    pub wing: Wing,
}

impl SubstitutionRecord {
    /// Whether this record covers the given duty on the given date.
    pub fn covers(&self, date: &str, absent_teacher_id: &str, slot_id: u8, class_name: &str) -> bool {
        self.date == date
            && self.absent_teacher_id == absent_teacher_id
            && self.slot_id == slot_id
            && self.class_name == class_name
    }
}
