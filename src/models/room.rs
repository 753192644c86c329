//! Room inventory.
//!
//! Rooms are read-only input to the generator. Allocation is by exact type
//! match: lab subjects require a lab room, everything else a classroom.

use serde::{Deserialize, Serialize};

use super::SubjectType;

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Classroom,
    Lab,
}

impl RoomType {
    /// The room type a subject of the given type must be hosted in.
    pub fn required_for(subject_type: SubjectType) -> RoomType {
        match subject_type {
            SubjectType::Lab => RoomType::Lab,
            SubjectType::Theory => RoomType::Classroom,
        }
    }
}

/// A physical room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name, e.g. "Room 101".
    pub name: String,
    /// Classroom or lab.
    pub room_type: RoomType,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, name, RoomType::Classroom, capacity)
    }

    /// Creates a lab room.
    pub fn lab(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, name, RoomType::Lab, capacity)
    }

    /// Creates a room of the given type.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        room_type: RoomType,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room_type,
            capacity,
        }
    }

    /// Whether this room can host a subject of the given type.
    pub fn suits(&self, subject_type: SubjectType) -> bool {
        self.room_type == RoomType::required_for(subject_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_type_match() {
        let classroom = Room::classroom("r1", "Room 101", 40);
        let lab = Room::lab("r2", "Chem Lab", 24);

        assert!(classroom.suits(SubjectType::Theory));
        assert!(!classroom.suits(SubjectType::Lab));
        assert!(lab.suits(SubjectType::Lab));
        // Labs are never used for theory periods.
        assert!(!lab.suits(SubjectType::Theory));
    }

    #[test]
    fn test_room_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&RoomType::Classroom).unwrap(),
            "\"CLASSROOM\""
        );
        assert_eq!(serde_json::to_string(&RoomType::Lab).unwrap(), "\"LAB\"");
    }
}
