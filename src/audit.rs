//! Conflict audit for produced timetables.
//!
//! Re-checks a flat entry list against the hard scheduling rules:
//! no double-booked class, teacher, or room; no entry on a slot its
//! teacher is unavailable for; every lab entry hosted in a real lab room.
//!
//! The generator never emits conflicting entries, so this is a safety net
//! for entries that were edited by hand or merged from earlier runs.

use std::collections::{HashMap, HashSet};

use crate::models::{Day, Room, RoomType, SubjectType, TeacherConstraint, TimetableEntry};

/// A detected scheduling conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Conflict category.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of scheduling conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Two entries put the same class in two places at once.
    ClassDoubleBooked,
    /// Two entries put the same teacher in two classes at once.
    TeacherDoubleBooked,
    /// Two entries put two classes in the same room at once.
    RoomDoubleBooked,
    /// An entry falls on a slot its teacher is blocked for.
    UnavailableTeacher,
    /// A lab entry has no room assigned.
    MissingLabRoom,
    /// An entry's room has the wrong type for its subject.
    RoomTypeMismatch,
    /// An entry references a room that is not in the inventory.
    UnknownRoom,
}

impl Conflict {
    fn new(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Audits a timetable against constraints and the room inventory.
///
/// Returns every detected conflict; an empty vector means the entry list
/// is a valid schedule.
pub fn audit(
    entries: &[TimetableEntry],
    constraints: &[TeacherConstraint],
    rooms: &[Room],
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let room_types: HashMap<&str, RoomType> =
        rooms.iter().map(|r| (r.id.as_str(), r.room_type)).collect();

    let mut class_seen: HashSet<(Day, u32, &str)> = HashSet::new();
    let mut teacher_seen: HashSet<(Day, u32, &str)> = HashSet::new();
    let mut room_seen: HashSet<(Day, u32, &str)> = HashSet::new();

    for entry in entries {
        let at = (entry.day, entry.period_index, entry.class_id.as_str());
        if !class_seen.insert(at) {
            conflicts.push(Conflict::new(
                ConflictKind::ClassDoubleBooked,
                format!(
                    "class '{}' is booked twice at {} period {}",
                    entry.class_id, entry.day, entry.period_index
                ),
            ));
        }

        if !teacher_seen.insert((entry.day, entry.period_index, entry.teacher_id.as_str())) {
            conflicts.push(Conflict::new(
                ConflictKind::TeacherDoubleBooked,
                format!(
                    "teacher '{}' is booked twice at {} period {}",
                    entry.teacher_id, entry.day, entry.period_index
                ),
            ));
        }

        if let Some(room_id) = entry.room_id.as_deref() {
            if !room_seen.insert((entry.day, entry.period_index, room_id)) {
                conflicts.push(Conflict::new(
                    ConflictKind::RoomDoubleBooked,
                    format!(
                        "room '{}' is booked twice at {} period {}",
                        room_id, entry.day, entry.period_index
                    ),
                ));
            }

            match room_types.get(room_id) {
                None => conflicts.push(Conflict::new(
                    ConflictKind::UnknownRoom,
                    format!("entry references unknown room '{room_id}'"),
                )),
                Some(&room_type) if room_type != RoomType::required_for(entry.subject_type) => {
                    conflicts.push(Conflict::new(
                        ConflictKind::RoomTypeMismatch,
                        format!(
                            "room '{}' ({room_type:?}) cannot host a {:?} period of '{}'",
                            room_id, entry.subject_type, entry.subject_id
                        ),
                    ));
                }
                Some(_) => {}
            }
        } else if entry.subject_type == SubjectType::Lab {
            conflicts.push(Conflict::new(
                ConflictKind::MissingLabRoom,
                format!(
                    "lab period of '{}' for class '{}' has no room",
                    entry.subject_id, entry.class_id
                ),
            ));
        }

        if constraints
            .iter()
            .any(|c| c.blocks(&entry.teacher_id, entry.slot()))
        {
            conflicts.push(Conflict::new(
                ConflictKind::UnavailableTeacher,
                format!(
                    "teacher '{}' is unavailable at {} period {}",
                    entry.teacher_id, entry.day, entry.period_index
                ),
            ));
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slot;

    fn entry(
        day: Day,
        period_index: u32,
        class_id: &str,
        teacher_id: &str,
        room_id: Option<&str>,
        subject_type: SubjectType,
    ) -> TimetableEntry {
        TimetableEntry {
            day,
            period_index,
            class_id: class_id.into(),
            subject_id: "s1".into(),
            teacher_id: teacher_id.into(),
            room_id: room_id.map(Into::into),
            subject_type,
        }
    }

    #[test]
    fn test_clean_schedule_has_no_conflicts() {
        let rooms = vec![Room::classroom("r1", "Room 101", 40)];
        let entries = vec![
            entry(Day::Monday, 1, "c1", "t1", Some("r1"), SubjectType::Theory),
            entry(Day::Monday, 2, "c1", "t1", Some("r1"), SubjectType::Theory),
        ];
        assert!(audit(&entries, &[], &rooms).is_empty());
    }

    #[test]
    fn test_class_double_booking_detected() {
        let entries = vec![
            entry(Day::Monday, 1, "c1", "t1", None, SubjectType::Theory),
            entry(Day::Monday, 1, "c1", "t2", None, SubjectType::Theory),
        ];
        let conflicts = audit(&entries, &[], &[]);
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::ClassDoubleBooked));
    }

    #[test]
    fn test_teacher_double_booking_detected() {
        let entries = vec![
            entry(Day::Tuesday, 3, "c1", "t1", None, SubjectType::Theory),
            entry(Day::Tuesday, 3, "c2", "t1", None, SubjectType::Theory),
        ];
        let conflicts = audit(&entries, &[], &[]);
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::TeacherDoubleBooked));
    }

    #[test]
    fn test_room_double_booking_detected() {
        let rooms = vec![Room::classroom("r1", "Room 101", 40)];
        let entries = vec![
            entry(Day::Monday, 1, "c1", "t1", Some("r1"), SubjectType::Theory),
            entry(Day::Monday, 1, "c2", "t2", Some("r1"), SubjectType::Theory),
        ];
        let conflicts = audit(&entries, &[], &rooms);
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::RoomDoubleBooked));
    }

    #[test]
    fn test_unavailable_teacher_detected() {
        let constraints = vec![TeacherConstraint::period("t1", Day::Monday, 1)];
        let entries = vec![entry(Day::Monday, 1, "c1", "t1", None, SubjectType::Theory)];
        let conflicts = audit(&entries, &constraints, &[]);
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::UnavailableTeacher));
        // Other slots of the day stay clean under a single-period block.
        let entries = vec![entry(Day::Monday, 2, "c1", "t1", None, SubjectType::Theory)];
        assert!(audit(&entries, &constraints, &[]).is_empty());
    }

    #[test]
    fn test_lab_room_integrity() {
        let rooms = vec![
            Room::classroom("r1", "Room 101", 40),
            Room::lab("r2", "Chem Lab", 24),
        ];

        // Room-less lab period.
        let conflicts = audit(
            &[entry(Day::Monday, 1, "c1", "t1", None, SubjectType::Lab)],
            &[],
            &rooms,
        );
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::MissingLabRoom));

        // Lab period in a classroom.
        let conflicts = audit(
            &[entry(Day::Monday, 1, "c1", "t1", Some("r1"), SubjectType::Lab)],
            &[],
            &rooms,
        );
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::RoomTypeMismatch));

        // Lab period in a lab room is fine.
        let conflicts = audit(
            &[entry(Day::Monday, 1, "c1", "t1", Some("r2"), SubjectType::Lab)],
            &[],
            &rooms,
        );
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_unknown_room_detected() {
        let conflicts = audit(
            &[entry(Day::Monday, 1, "c1", "t1", Some("ghost"), SubjectType::Theory)],
            &[],
            &[],
        );
        assert!(conflicts.iter().any(|c| c.kind == ConflictKind::UnknownRoom));
    }

    #[test]
    fn test_entry_slot_accessor() {
        let e = entry(Day::Friday, 4, "c1", "t1", None, SubjectType::Theory);
        assert_eq!(e.slot(), Slot::new(Day::Friday, 4));
    }
}
