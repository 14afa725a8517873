//! Teaching staff and role-based wing compatibility.

use serde::{Deserialize, Serialize};

use super::Wing;

/// Staff role.
///
/// Roles determine which wings a person may teach or substitute in.
/// Management and administrative roles never appear in substitution pools
/// or absence scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    Admin,
    InchargeAll,
    InchargePrimary,
    InchargeSecondary,
    TeacherPrimary,
    TeacherSecondary,
    TeacherSeniorSecondary,
    AdminStaff,
}

impl StaffRole {
    /// Whether this is one of the three classroom teaching roles.
    ///
    /// Only teaching roles are scanned for absences in the substitution
    /// fill pass.
    pub fn is_teaching(&self) -> bool {
        matches!(
            self,
            StaffRole::TeacherPrimary | StaffRole::TeacherSecondary | StaffRole::TeacherSeniorSecondary
        )
    }

    /// Whether this role may cover duties in the given wing.
    ///
    /// Primary roles cover the primary wing; secondary and senior-secondary
    /// roles cover both secondary wings. Wing incharges count alongside
    /// their wing's teachers.
    pub fn covers_wing(&self, wing: Wing) -> bool {
        match wing {
            Wing::Primary => {
                matches!(self, StaffRole::TeacherPrimary | StaffRole::InchargePrimary)
            }
            Wing::SecondaryBoys | Wing::SecondaryGirls => matches!(
                self,
                StaffRole::TeacherSecondary
                    | StaffRole::TeacherSeniorSecondary
                    | StaffRole::InchargeSecondary
            ),
        }
    }

    /// Whether this role is a management role.
    ///
    /// Not consumed by planning or substitution; exists for roster
    /// administration callers.
    pub fn is_management(&self) -> bool {
        matches!(
            self,
            StaffRole::Admin
                | StaffRole::InchargeAll
                | StaffRole::InchargePrimary
                | StaffRole::InchargeSecondary
        )
    }
}

/// A staff member in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique identifier.
    pub id: String,
    /// Employee number.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Staff role.
    pub role: StaffRole,
    /// Class name this teacher is homeroom teacher of, if any.
    pub class_teacher_of: Option<String>,
}

impl Teacher {
    /// Creates a new staff member.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        name: impl Into<String>,
        role: StaffRole,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            name: name.into(),
            role,
            class_teacher_of: None,
        }
    }

    /// Marks this teacher as class teacher of a section.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_teacher_of = Some(class_name.into());
        self
    }
}

/// Looks up a teacher's display name, defaulting to `"Unknown"`.
pub fn teacher_name(roster: &[Teacher], teacher_id: &str) -> String {
    roster
        .iter()
        .find(|t| t.id == teacher_id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teaching_roles() {
        assert!(StaffRole::TeacherPrimary.is_teaching());
        assert!(StaffRole::TeacherSeniorSecondary.is_teaching());
        assert!(!StaffRole::InchargePrimary.is_teaching());
        assert!(!StaffRole::Admin.is_teaching());
        assert!(!StaffRole::AdminStaff.is_teaching());
    }

    #[test]
    fn test_wing_coverage() {
        assert!(StaffRole::TeacherPrimary.covers_wing(Wing::Primary));
        assert!(!StaffRole::TeacherPrimary.covers_wing(Wing::SecondaryBoys));
        assert!(StaffRole::TeacherSecondary.covers_wing(Wing::SecondaryGirls));
        assert!(StaffRole::TeacherSeniorSecondary.covers_wing(Wing::SecondaryBoys));
        assert!(StaffRole::InchargeSecondary.covers_wing(Wing::SecondaryBoys));
        assert!(!StaffRole::InchargeSecondary.covers_wing(Wing::Primary));
        // Global roles are not wing-compatible for classroom duty.
        assert!(!StaffRole::Admin.covers_wing(Wing::Primary));
        assert!(!StaffRole::InchargeAll.covers_wing(Wing::SecondaryGirls));
    }

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("t1", "emp101", "Mohammed Ali", StaffRole::TeacherPrimary)
            .with_class("IV A");
        assert_eq!(t.class_teacher_of.as_deref(), Some("IV A"));
    }

    #[test]
    fn test_name_lookup() {
        let roster = vec![Teacher::new("t1", "emp101", "Mohammed Ali", StaffRole::TeacherPrimary)];
        assert_eq!(teacher_name(&roster, "t1"), "Mohammed Ali");
        assert_eq!(teacher_name(&roster, "ghost"), "Unknown");
    }
}
