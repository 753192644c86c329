//! Structural input checks for timetable generation.
//!
//! Catches data problems before the search runs: duplicate IDs, dangling
//! teacher references, zero-period loads, and templates with no teaching
//! periods. All issues are collected and reported together.
//!
//! Semantic infeasibility (e.g. a lab subject with no lab room in the
//! inventory) is deliberately not checked here; it surfaces as a `None`
//! result from the generator after the search is exhausted.

use std::collections::HashSet;

use crate::models::{Assignment, PeriodTemplate, Room, Roster, TeacherConstraint};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A constraint or assignment references a teacher that doesn't exist.
    UnknownTeacherReference,
    /// An assignment demands zero periods per week.
    ZeroPeriodLoad,
    /// The period template has no non-break periods.
    NoSchedulablePeriods,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates roster entities, rooms, constraints, and the period template.
///
/// Checks:
/// 1. No duplicate teacher, subject, class, or room IDs
/// 2. All constraints reference existing teachers
/// 3. The template has at least one non-break period
///
/// Returns `Ok(())` if all checks pass, `Err(errors)` with every detected
/// issue otherwise.
pub fn validate_roster(
    roster: &Roster,
    rooms: &[Room],
    constraints: &[TeacherConstraint],
    template: &PeriodTemplate,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_ids = HashSet::new();
    for teacher in &roster.teachers {
        if !teacher_ids.insert(teacher.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", teacher.id),
            ));
        }
    }

    let mut subject_ids = HashSet::new();
    for subject in &roster.subjects {
        if !subject_ids.insert(subject.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", subject.id),
            ));
        }
    }

    let mut class_ids = HashSet::new();
    for class in &roster.classes {
        if !class_ids.insert(class.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate class ID: {}", class.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
    }

    for constraint in constraints {
        if !teacher_ids.contains(constraint.teacher_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeacherReference,
                format!(
                    "Constraint references unknown teacher '{}'",
                    constraint.teacher_id
                ),
            ));
        }
    }

    if template.periods_per_day() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoSchedulablePeriods,
            format!("Template '{}' has no teaching periods", template.name),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates caller-built assignments against the roster.
///
/// Checks that every assignment demands at least one period per week and
/// references an existing teacher.
pub fn validate_assignments(assignments: &[Assignment], roster: &Roster) -> ValidationResult {
    let teacher_ids: HashSet<&str> = roster.teachers.iter().map(|t| t.id.as_str()).collect();
    let mut errors = Vec::new();

    for assignment in assignments {
        if assignment.periods_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroPeriodLoad,
                format!(
                    "Assignment of '{}' to class '{}' demands zero periods",
                    assignment.subject_id, assignment.class_id
                ),
            ));
        }
        if !teacher_ids.contains(assignment.teacher_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeacherReference,
                format!(
                    "Assignment of '{}' references unknown teacher '{}'",
                    assignment.subject_id, assignment.teacher_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
