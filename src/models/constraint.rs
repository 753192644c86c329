//! Teacher unavailability constraints.
//!
//! A constraint blocks a teacher for a whole day or for one specific
//! period of a day. Constraints are hard: the generator never places a
//! teacher into a blocked slot.

use serde::{Deserialize, Serialize};

use super::{Day, Slot};

/// A teacher unavailability rule.
///
/// When `period_index` is `None` the teacher is unavailable for the entire
/// day; otherwise only for that period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherConstraint {
    /// Blocked teacher.
    pub teacher_id: String,
    /// Blocked day.
    pub day: Day,
    /// Blocked period, or `None` for the whole day.
    pub period_index: Option<u32>,
    /// Free-form reason, e.g. "Staff meeting".
    pub reason: Option<String>,
}

impl TeacherConstraint {
    /// Blocks a teacher for an entire day.
    pub fn full_day(teacher_id: impl Into<String>, day: Day) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            day,
            period_index: None,
            reason: None,
        }
    }

    /// Blocks a teacher for one period of a day.
    pub fn period(teacher_id: impl Into<String>, day: Day, period_index: u32) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            day,
            period_index: Some(period_index),
            reason: None,
        }
    }

    /// Sets the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Whether this constraint blocks the given teacher at the given slot.
    pub fn blocks(&self, teacher_id: &str, slot: Slot) -> bool {
        self.teacher_id == teacher_id
            && self.day == slot.day
            && self
                .period_index
                .map_or(true, |p| p == slot.period_index)
    }
}
