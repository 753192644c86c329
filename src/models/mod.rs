//! Timetabling domain models.
//!
//! The vocabulary the generator operates over: days and slots, period
//! timing templates, roster entities, rooms, assignment demand units,
//! unavailability constraints, and the scheduled entries it produces.
//!
//! All types are plain data with structural validity only; cross-entity
//! checks live in [`validation`](crate::validation).

mod assignment;
mod constraint;
mod entry;
mod room;
mod roster;
mod slot;
mod timing;

pub use assignment::Assignment;
pub use constraint::TeacherConstraint;
pub use entry::TimetableEntry;
pub use room::{Room, RoomType};
pub use roster::{Roster, SchoolClass, Subject, SubjectType, Teacher};
pub use slot::{Day, Slot};
pub use timing::{PeriodTemplate, TimingSlot};
