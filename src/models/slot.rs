//! Days and schedulable slots.
//!
//! A [`Slot`] is a (day, period) coordinate that the generator may place a
//! lesson into. Break periods never become slots; `period_index` is the
//! 1-based ordinal among non-break periods of the day.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A working day of the school week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// The six working days, Monday through Saturday, in week order.
    pub const WORKING: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "MONDAY",
            Day::Tuesday => "TUESDAY",
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
            Day::Friday => "FRIDAY",
            Day::Saturday => "SATURDAY",
        };
        f.write_str(name)
    }
}

/// A schedulable (day, period) coordinate.
///
/// `period_index` is 1-based and counts only non-break periods, so the
/// numbering lines up with the period template when the grid is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Working day.
    pub day: Day,
    /// 1-based period ordinal among non-break periods.
    pub period_index: u32,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Day, period_index: u32) -> Self {
        Self { day, period_index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_wire_format() {
        let json = serde_json::to_string(&Day::Wednesday).unwrap();
        assert_eq!(json, "\"WEDNESDAY\"");
        let back: Day = serde_json::from_str("\"SATURDAY\"").unwrap();
        assert_eq!(back, Day::Saturday);
    }

    #[test]
    fn test_day_ordering() {
        assert!(Day::Monday < Day::Tuesday);
        assert!(Day::Friday < Day::Saturday);
        assert_eq!(Day::WORKING.len(), 6);
    }

    #[test]
    fn test_day_display_matches_wire() {
        for day in Day::WORKING {
            let wire = serde_json::to_string(&day).unwrap();
            assert_eq!(wire, format!("\"{day}\""));
        }
    }
}
