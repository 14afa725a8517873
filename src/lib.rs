//! Weekly timetable generation and duty cover for a multi-wing school.
//!
//! Builds a full week's teaching grid from class sections, a staff roster,
//! a subject catalog, and per-(teacher, grade) period quotas, then keeps
//! that grid serviceable day to day: advisory conflict checks on manual
//! edits, quota reconciliation after pinning cells, and a daily
//! substitution pass that covers the duties of absent teachers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClassSection`, `Teacher`, `Subject`,
//!   `TeacherAssignment`, `TimetableEntry`, `SlotTable`, attendance and
//!   substitution records
//! - **`planner`**: The three-phase grid generator (homerooms, synchronized
//!   language/religion blocks, general fill)
//! - **`pool`**: Remaining-period ledger driving the generator
//! - **`availability`**: Occupancy index over teacher and class cells
//! - **`conflict`**: Advisory double-booking and weekly-load checks for
//!   manual edits
//! - **`reconcile`**: Quota raising after manual cell writes
//! - **`substitution`**: Daily purge-and-fill of cover records
//! - **`validation`**: Structural double-booking checks on a full grid
//!
//! # Architecture
//!
//! Everything is in-memory and deterministic given a seeded generator:
//! callers own persistence and the interactive surface, this crate owns
//! the scheduling semantics.

pub mod availability;
pub mod conflict;
pub mod models;
pub mod planner;
pub mod pool;
pub mod reconcile;
pub mod substitution;
pub mod validation;
