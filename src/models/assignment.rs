//! Assignment demand units.
//!
//! An [`Assignment`] states that a teacher teaches a subject to a class for
//! a given number of periods per week. The generator flattens each
//! assignment into `periods_per_week` independently placed units.

use serde::{Deserialize, Serialize};

use super::SubjectType;

/// A (teacher, subject, class) demand with a weekly period count.
///
/// Read-only input to the generator; never mutated during solving.
/// `periods_per_week` must be at least 1 (enforced by
/// [`validation`](crate::validation), not by the solver).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned teacher.
    pub teacher_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Receiving class.
    pub class_id: String,
    /// Theory or lab; drives room allocation.
    pub subject_type: SubjectType,
    /// Weekly period count; each period is placed independently.
    pub periods_per_week: u32,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(
        teacher_id: impl Into<String>,
        subject_id: impl Into<String>,
        class_id: impl Into<String>,
        subject_type: SubjectType,
        periods_per_week: u32,
    ) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            subject_id: subject_id.into(),
            class_id: class_id.into(),
            subject_type,
            periods_per_week,
        }
    }
}
