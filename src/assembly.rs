//! Reference input assembly for timetable generation.
//!
//! Bridges roster entities to the generator's inputs the way the standard
//! caller does: pair each in-scope class with each in-scope subject,
//! allocate teachers round-robin (department-filtered when a department
//! scope is set, falling back to the full pool when the filter comes up
//! empty), derive the slot universe from the period template, and map a
//! failed search to a user-facing error.
//!
//! Persisting the returned entries (and deleting prior entries for the
//! affected classes) is the caller's job; the result here is a pure value.

use log::{info, warn};
use thiserror::Error;

use crate::generator::TimetableGenerator;
use crate::models::{
    Assignment, PeriodTemplate, Room, Roster, SchoolClass, Slot, Subject, Teacher,
    TeacherConstraint, TimetableEntry,
};
use crate::validation::{self, ValidationError};

/// Which classes a generation run covers.
///
/// A `class_id` scope wins over a `department_id` scope; with neither set,
/// every class in the roster is scheduled.
#[derive(Debug, Clone, Default)]
pub struct GenerateScope {
    /// Restrict to classes of this department.
    pub department_id: Option<String>,
    /// Restrict to a single class.
    pub class_id: Option<String>,
}

impl GenerateScope {
    /// Every class in the roster.
    pub fn all() -> Self {
        Self::default()
    }

    /// Classes of one department.
    pub fn department(department_id: impl Into<String>) -> Self {
        Self {
            department_id: Some(department_id.into()),
            class_id: None,
        }
    }

    /// A single class.
    pub fn class(class_id: impl Into<String>) -> Self {
        Self {
            department_id: None,
            class_id: Some(class_id.into()),
        }
    }
}

/// Why a generation run could not produce a timetable.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The period template has no teaching periods.
    #[error("no teaching periods defined; configure period timings first")]
    NoSchedulablePeriods,
    /// The roster has no teachers.
    #[error("add at least one teacher before generating")]
    NoTeachers,
    /// The roster has no subjects.
    #[error("add at least one subject before generating")]
    NoSubjects,
    /// No classes match the requested scope.
    #[error("no classes found for the selected scope")]
    NoClassesInScope,
    /// Structural problems in the input data.
    #[error("invalid scheduling input ({} issue(s))", .0.len())]
    InvalidInput(Vec<ValidationError>),
    /// The search exhausted without a conflict-free schedule.
    #[error("could not generate a conflict-free timetable; try adding more rooms or relaxing constraints")]
    Infeasible,
}

/// The classes a scope selects, in roster order.
pub fn classes_in_scope<'a>(roster: &'a Roster, scope: &GenerateScope) -> Vec<&'a SchoolClass> {
    if let Some(class_id) = scope.class_id.as_deref() {
        roster.classes.iter().filter(|c| c.id == class_id).collect()
    } else if let Some(dept) = scope.department_id.as_deref() {
        roster
            .classes
            .iter()
            .filter(|c| c.department_id.as_deref() == Some(dept))
            .collect()
    } else {
        roster.classes.iter().collect()
    }
}

fn subjects_in_scope<'a>(roster: &'a Roster, scope: &GenerateScope) -> Vec<&'a Subject> {
    match scope.department_id.as_deref() {
        Some(dept) => {
            let filtered: Vec<&Subject> = roster
                .subjects
                .iter()
                .filter(|s| s.department_id.as_deref() == Some(dept))
                .collect();
            if filtered.is_empty() {
                // Department has no subjects of its own; fall back to the
                // full catalogue rather than producing an empty timetable.
                roster.subjects.iter().collect()
            } else {
                filtered
            }
        }
        None => roster.subjects.iter().collect(),
    }
}

fn teacher_pool<'a>(roster: &'a Roster, scope: &GenerateScope) -> Vec<&'a Teacher> {
    match scope.department_id.as_deref() {
        Some(dept) => {
            let filtered: Vec<&Teacher> = roster
                .teachers
                .iter()
                .filter(|t| t.department_id.as_deref() == Some(dept))
                .collect();
            if filtered.is_empty() {
                roster.teachers.iter().collect()
            } else {
                filtered
            }
        }
        None => roster.teachers.iter().collect(),
    }
}

/// Builds one assignment per (class, subject) pair in scope.
///
/// Teachers are taken round-robin from the scoped pool with a single
/// cursor across the whole build, so load spreads evenly. Weekly period
/// counts follow the subject type defaults (lab 2, theory 4).
///
/// Returns an empty vector when the roster has no teachers.
pub fn build_assignments(roster: &Roster, scope: &GenerateScope) -> Vec<Assignment> {
    if roster.teachers.is_empty() {
        return Vec::new();
    }

    let subjects = subjects_in_scope(roster, scope);
    let pool = teacher_pool(roster, scope);
    let mut assignments = Vec::new();
    let mut teacher_cursor = 0usize;

    for class in classes_in_scope(roster, scope) {
        for subject in &subjects {
            let teacher = pool[teacher_cursor % pool.len()];
            teacher_cursor += 1;
            assignments.push(Assignment::new(
                &teacher.id,
                &subject.id,
                &class.id,
                subject.subject_type,
                subject.subject_type.default_periods_per_week(),
            ));
        }
    }

    assignments
}

/// Runs a full generation: validate, assemble, search.
///
/// On success the returned entries replace any previously persisted
/// entries for the scoped classes; on [`GenerateError::Infeasible`] the
/// caller surfaces the error's display message to the user.
pub fn generate_timetable(
    roster: &Roster,
    template: &PeriodTemplate,
    constraints: &[TeacherConstraint],
    rooms: &[Room],
    scope: &GenerateScope,
) -> Result<Vec<TimetableEntry>, GenerateError> {
    let (assignments, slots) = prepare(roster, template, constraints, rooms, scope)?;
    let generator =
        TimetableGenerator::new(assignments, constraints.to_vec(), slots, rooms.to_vec());
    finish(generator.generate())
}

/// Like [`generate_timetable`] but with a fixed RNG seed, for
/// reproducible runs.
pub fn generate_timetable_seeded(
    roster: &Roster,
    template: &PeriodTemplate,
    constraints: &[TeacherConstraint],
    rooms: &[Room],
    scope: &GenerateScope,
    seed: u64,
) -> Result<Vec<TimetableEntry>, GenerateError> {
    let (assignments, slots) = prepare(roster, template, constraints, rooms, scope)?;
    let generator =
        TimetableGenerator::seeded(assignments, constraints.to_vec(), slots, rooms.to_vec(), seed);
    finish(generator.generate())
}

fn prepare(
    roster: &Roster,
    template: &PeriodTemplate,
    constraints: &[TeacherConstraint],
    rooms: &[Room],
    scope: &GenerateScope,
) -> Result<(Vec<Assignment>, Vec<Slot>), GenerateError> {
    if template.periods_per_day() == 0 {
        return Err(GenerateError::NoSchedulablePeriods);
    }
    if roster.teachers.is_empty() {
        return Err(GenerateError::NoTeachers);
    }
    if roster.subjects.is_empty() {
        return Err(GenerateError::NoSubjects);
    }
    let class_count = classes_in_scope(roster, scope).len();
    if class_count == 0 {
        return Err(GenerateError::NoClassesInScope);
    }

    validation::validate_roster(roster, rooms, constraints, template)
        .map_err(GenerateError::InvalidInput)?;

    let assignments = build_assignments(roster, scope);
    validation::validate_assignments(&assignments, roster)
        .map_err(GenerateError::InvalidInput)?;

    let slots = template.build_slots();
    info!(
        "assembled {} assignments for {} classes over {} slots ({} rooms, {} constraints)",
        assignments.len(),
        class_count,
        slots.len(),
        rooms.len(),
        constraints.len()
    );
    Ok((assignments, slots))
}

fn finish(result: Option<Vec<TimetableEntry>>) -> Result<Vec<TimetableEntry>, GenerateError> {
    match result {
        Some(entries) => Ok(entries),
        None => {
            warn!("generation failed; search exhausted without a schedule");
            Err(GenerateError::Infeasible)
        }
    }
}
