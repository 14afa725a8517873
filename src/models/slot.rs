//! Time slots, wings, and the per-wing slot tables.
//!
//! Each wing of the school runs its own ordered slot sequence with its own
//! recess placement. Slot sequences are configuration: the planner only
//! reads them, never edits them.

use serde::{Deserialize, Serialize};

/// Week days in teaching order. The school week runs Sunday through Thursday.
pub const SCHOOL_DAYS: [&str; 5] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];

/// One period in a wing's daily sequence.
///
/// Break slots carry `id = 0` and `is_break = true`; they never receive
/// timetable entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Ordinal period number (1-based). 0 for breaks.
    pub id: u8,
    /// Display label (e.g., "P1", "RECESS").
    pub label: String,
    /// Start time, "HH:MM".
    pub start_time: String,
    /// End time, "HH:MM".
    pub end_time: String,
    /// Whether this slot is a recess rather than a teaching period.
    pub is_break: bool,
}

impl TimeSlot {
    /// Creates a teaching period.
    pub fn period(id: u8, label: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            start_time: start.into(),
            end_time: end.into(),
            is_break: false,
        }
    }

    /// Creates a recess slot.
    pub fn recess(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id: 0,
            label: "RECESS".into(),
            start_time: start.into(),
            end_time: end.into(),
            is_break: true,
        }
    }
}

/// One of the three fixed school divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wing {
    Primary,
    SecondaryBoys,
    SecondaryGirls,
}

impl Wing {
    /// Number of teaching periods in a day for this wing.
    ///
    /// The primary wing has no slot 9.
    pub fn teaching_slot_count(&self) -> u8 {
        match self {
            Wing::Primary => 8,
            Wing::SecondaryBoys | Wing::SecondaryGirls => 9,
        }
    }

    /// Whether a slot ordinal is a valid teaching slot in this wing.
    pub fn has_slot(&self, slot_id: u8) -> bool {
        slot_id >= 1 && slot_id <= self.teaching_slot_count()
    }
}

/// Ordered slot sequences per wing.
///
/// The planner reads only the wing cutoffs ([`Wing::has_slot`]); the full
/// sequences with labels, times, and recess placement exist for rendering
/// and configuration callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotTable {
    primary: Vec<TimeSlot>,
    secondary_boys: Vec<TimeSlot>,
    secondary_girls: Vec<TimeSlot>,
}

impl SlotTable {
    /// The standard school configuration: 8 periods for the primary wing
    /// with recess after P4, 9 periods for both secondary wings (girls'
    /// recess after P4, boys' after P5).
    pub fn standard() -> Self {
        let eight_with_early_recess = vec![
            TimeSlot::period(1, "P1", "07:20", "08:00"),
            TimeSlot::period(2, "P2", "08:00", "08:40"),
            TimeSlot::period(3, "P3", "08:40", "09:20"),
            TimeSlot::period(4, "P4", "09:20", "10:00"),
            TimeSlot::recess("10:00", "10:20"),
            TimeSlot::period(5, "P5", "10:20", "11:00"),
            TimeSlot::period(6, "P6", "11:00", "11:40"),
            TimeSlot::period(7, "P7", "11:40", "12:20"),
            TimeSlot::period(8, "P8", "12:20", "13:00"),
        ];

        let mut girls = eight_with_early_recess.clone();
        girls.push(TimeSlot::period(9, "P9", "13:00", "13:40"));

        let boys = vec![
            TimeSlot::period(1, "P1", "07:20", "08:00"),
            TimeSlot::period(2, "P2", "08:00", "08:40"),
            TimeSlot::period(3, "P3", "08:40", "09:20"),
            TimeSlot::period(4, "P4", "09:20", "10:00"),
            TimeSlot::period(5, "P5", "10:00", "10:40"),
            TimeSlot::recess("10:40", "11:00"),
            TimeSlot::period(6, "P6", "11:00", "11:40"),
            TimeSlot::period(7, "P7", "11:40", "12:20"),
            TimeSlot::period(8, "P8", "12:20", "13:00"),
            TimeSlot::period(9, "P9", "13:00", "13:40"),
        ];

        Self {
            primary: eight_with_early_recess,
            secondary_boys: boys,
            secondary_girls: girls,
        }
    }

    /// The slot sequence for a wing, breaks included, in display order.
    pub fn slots_for(&self, wing: Wing) -> &[TimeSlot] {
        match wing {
            Wing::Primary => &self.primary,
            Wing::SecondaryBoys => &self.secondary_boys,
            Wing::SecondaryGirls => &self.secondary_girls,
        }
    }

    /// Teaching slot ordinals for a wing, in sequence order.
    pub fn teaching_slot_ids(&self, wing: Wing) -> Vec<u8> {
        self.slots_for(wing)
            .iter()
            .filter(|s| !s.is_break)
            .map(|s| s.id)
            .collect()
    }
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::standard()
    }
}
