//! Subjects and their scheduling categories.

use serde::{Deserialize, Serialize};

/// Scheduling category of a subject.
///
/// `Core` subjects are filled per-section; the four remaining categories are
/// scheduled as synchronized blocks across all sibling sections of a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectCategory {
    Core,
    SecondLanguage,
    SecondLanguageSenior,
    ThirdLanguage,
    ReligiousMoralEducation,
}

impl SubjectCategory {
    /// The block-synchronized categories, in scheduling order.
    pub const SYNCHRONIZED: [SubjectCategory; 4] = [
        SubjectCategory::SecondLanguage,
        SubjectCategory::SecondLanguageSenior,
        SubjectCategory::ThirdLanguage,
        SubjectCategory::ReligiousMoralEducation,
    ];

    /// Whether this category is scheduled as a cross-section block.
    pub fn is_synchronized(&self) -> bool {
        !matches!(self, SubjectCategory::Core)
    }
}

/// A subject in the school catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier.
    pub id: String,
    /// Display name; timetable entries reference subjects by name.
    pub name: String,
    /// Scheduling category.
    pub category: SubjectCategory,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: SubjectCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
        }
    }
}

/// Looks up a subject's category by name, defaulting to `Core`.
///
/// Unknown subjects (e.g. a load referencing a deleted catalog entry) are
/// tolerated rather than rejected.
pub fn category_of(subjects: &[Subject], name: &str) -> SubjectCategory {
    subjects
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.category)
        .unwrap_or(SubjectCategory::Core)
}
