//! Timetable entries (solver output).

use serde::{Deserialize, Serialize};

use super::{Day, Slot, SubjectType};

/// One scheduled atomic unit: a class meets a teacher for a subject at a
/// (day, period), optionally in a room.
///
/// `room_id` is `None` when a non-lab period could not be given a free
/// classroom; lab periods always carry a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Scheduled day.
    pub day: Day,
    /// 1-based period ordinal.
    pub period_index: u32,
    /// Class in session.
    pub class_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Teacher in session.
    pub teacher_id: String,
    /// Hosting room, if one was free.
    pub room_id: Option<String>,
    /// Theory or lab.
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
}

impl TimetableEntry {
    /// The slot this entry occupies.
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.period_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_type_serializes_as_type() {
        let entry = TimetableEntry {
            day: Day::Monday,
            period_index: 2,
            class_id: "c1".into(),
            subject_id: "s1".into(),
            teacher_id: "t1".into(),
            room_id: None,
            subject_type: SubjectType::Lab,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "LAB");
        assert_eq!(json["day"], "MONDAY");
        assert!(json["room_id"].is_null());
    }
}
