//! Timetable generation engine for school scheduling.
//!
//! Assigns weekly (teacher, subject, class) teaching loads to (day, period)
//! slots — and, where possible, rooms — via randomized depth-first
//! backtracking, producing a conflict-free weekly schedule or reporting
//! infeasibility.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Assignment`, `TeacherConstraint`, `Slot`,
//!   `PeriodTemplate`, `Room`, `Roster`, `TimetableEntry`
//! - **`generator`**: The backtracking solver (`TimetableGenerator`)
//! - **`assembly`**: Reference input assembly — pairs classes with subjects,
//!   round-robin teacher allocation, slot universe construction
//! - **`validation`**: Structural input checks (duplicate IDs, dangling
//!   references, zero-period loads)
//! - **`audit`**: Conflict audit of a produced timetable
//!
//! # Determinism
//!
//! The search shuffles both the placement order and, at every search node,
//! the slot order. Two runs on identical input may therefore produce
//! different (equally valid) schedules, and on marginal instances may even
//! differ in whether a schedule is found at all — this is intended
//! variation, not a defect. Construct the generator with
//! [`generator::TimetableGenerator::seeded`] when reproducible runs are
//! required.
//!
//! # Concurrency
//!
//! A generator instance owns all of its working state and serves exactly
//! one `generate()` call; the call consumes the instance. Concurrent
//! callers each construct their own instance.

pub mod assembly;
pub mod audit;
pub mod generator;
pub mod models;
pub mod validation;
