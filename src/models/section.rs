//! Class sections and grade derivation.
//!
//! A grade is not stored on the section: it is derived from the class name
//! by extracting the first Roman-numeral token, falling back to the first
//! digit run. Sections sharing a grade token are siblings and are scheduled
//! together for synchronized blocks.

use serde::{Deserialize, Serialize};

use super::Wing;

/// A class section (one room of one grade, e.g. "IV A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSection {
    /// Unique identifier.
    pub id: String,
    /// Display name; the grade token is extracted from this.
    pub name: String,
    /// The wing this section belongs to.
    pub wing: Wing,
}

impl ClassSection {
    /// Creates a new section.
    pub fn new(id: impl Into<String>, name: impl Into<String>, wing: Wing) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wing,
        }
    }

    /// The grade token of this section's name.
    pub fn grade(&self) -> String {
        grade_of(&self.name)
    }
}

/// Derives the grade label from a class name.
///
/// The first run of Roman-numeral characters (`I`, `V`, `X`) wins; failing
/// that, the first digit run. Names with neither are returned unchanged.
///
/// ```
/// use timetabler::models::grade_of;
///
/// assert_eq!(grade_of("IV A"), "Grade IV");
/// assert_eq!(grade_of("X B"), "Grade X");
/// assert_eq!(grade_of("7 C"), "Grade 7");
/// assert_eq!(grade_of("Nursery"), "Nursery");
/// ```
pub fn grade_of(class_name: &str) -> String {
    if let Some(token) = first_run(class_name, |c| matches!(c, 'I' | 'V' | 'X')) {
        return format!("Grade {token}");
    }
    if let Some(token) = first_run(class_name, |c| c.is_ascii_digit()) {
        return format!("Grade {token}");
    }
    class_name.to_string()
}

/// First maximal run of characters matching `pred`, if any.
fn first_run(s: &str, pred: impl Fn(char) -> bool) -> Option<&str> {
    let start = s.find(|c| pred(c))?;
    let rest = &s[start..];
    let len = rest.find(|c| !pred(c)).unwrap_or(rest.len());
    Some(&rest[..len])
}
