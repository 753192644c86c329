//! Randomized backtracking timetable generator.
//!
//! # Algorithm
//!
//! 1. Flatten every assignment into `periods_per_week` atomic units.
//! 2. Shuffle the unit list (Fisher–Yates).
//! 3. Depth-first backtracking: place the next unit into the first safe
//!    slot of a freshly shuffled slot order, recurse, undo on failure.
//! 4. A slot is safe when the class, the teacher, and (for lab subjects)
//!    a lab room are all free and no unavailability constraint matches.
//!
//! The search is exhaustive relative to the orderings it explores: it
//! terminates only on success or after trying every slot at every depth.
//! There is no node or time budget, so worst-case cost is exponential in
//! the unit count; callers with pathological inputs should enforce their
//! own wall-clock limit.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6 (Constraint Satisfaction Problems, backtracking search)

use std::collections::{HashMap, HashSet};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{
    Assignment, Day, Room, Slot, SubjectType, TeacherConstraint, TimetableEntry,
};

/// One indivisible (teacher, subject, class) meeting to place in one slot.
#[derive(Debug, Clone)]
struct AtomicUnit {
    teacher_id: String,
    subject_id: String,
    class_id: String,
    subject_type: SubjectType,
}

impl AtomicUnit {
    fn from_assignment(assignment: &Assignment) -> Self {
        Self {
            teacher_id: assignment.teacher_id.clone(),
            subject_id: assignment.subject_id.clone(),
            class_id: assignment.class_id.clone(),
            subject_type: assignment.subject_type,
        }
    }
}

/// Composite occupancy key: who (class, teacher, or room) holds which
/// (day, period). A dedicated value type rather than a delimited string,
/// so ids containing separator characters cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OccupancyKey {
    day: Day,
    period_index: u32,
    owner: String,
}

impl OccupancyKey {
    fn new(slot: Slot, owner: &str) -> Self {
        Self {
            day: slot.day,
            period_index: slot.period_index,
            owner: owner.to_owned(),
        }
    }
}

/// Working state of one generation run.
///
/// Created empty per `generate()` call, mutated by place/unplace during
/// the search, and discarded at the end. Never shared between runs.
#[derive(Debug, Default)]
struct SearchState {
    /// (day, period, class) → occupying entry.
    grid: HashMap<OccupancyKey, TimetableEntry>,
    /// (day, period, teacher) keys currently occupied.
    teacher_busy: HashSet<OccupancyKey>,
    /// (day, period, room) keys currently occupied.
    room_busy: HashSet<OccupancyKey>,
}

impl SearchState {
    fn class_occupied(&self, slot: Slot, class_id: &str) -> bool {
        self.grid.contains_key(&OccupancyKey::new(slot, class_id))
    }

    fn teacher_occupied(&self, slot: Slot, teacher_id: &str) -> bool {
        self.teacher_busy
            .contains(&OccupancyKey::new(slot, teacher_id))
    }

    fn room_occupied(&self, slot: Slot, room_id: &str) -> bool {
        self.room_busy.contains(&OccupancyKey::new(slot, room_id))
    }

    fn place(&mut self, unit: &AtomicUnit, slot: Slot, room_id: Option<String>) {
        if let Some(ref room_id) = room_id {
            self.room_busy.insert(OccupancyKey::new(slot, room_id));
        }
        self.teacher_busy
            .insert(OccupancyKey::new(slot, &unit.teacher_id));
        self.grid.insert(
            OccupancyKey::new(slot, &unit.class_id),
            TimetableEntry {
                day: slot.day,
                period_index: slot.period_index,
                class_id: unit.class_id.clone(),
                subject_id: unit.subject_id.clone(),
                teacher_id: unit.teacher_id.clone(),
                room_id,
                subject_type: unit.subject_type,
            },
        );
    }

    /// Exact inverse of [`place`](Self::place). The room mark is removed
    /// only when a room was actually assigned, so backtracking restores
    /// the state to its pre-placement form.
    fn unplace(&mut self, unit: &AtomicUnit, slot: Slot, room_id: Option<&str>) {
        self.grid.remove(&OccupancyKey::new(slot, &unit.class_id));
        self.teacher_busy
            .remove(&OccupancyKey::new(slot, &unit.teacher_id));
        if let Some(room_id) = room_id {
            self.room_busy.remove(&OccupancyKey::new(slot, room_id));
        }
    }
}

/// Backtracking timetable generator.
///
/// One instance serves exactly one [`generate`](Self::generate) call;
/// the call consumes the instance, so working state can never leak into
/// a second run.
///
/// # Example
///
/// ```
/// use timetable_engine::generator::TimetableGenerator;
/// use timetable_engine::models::{Assignment, Day, Slot, SubjectType};
///
/// let assignments = vec![Assignment::new("t1", "s1", "c1", SubjectType::Theory, 2)];
/// let slots = vec![Slot::new(Day::Monday, 1), Slot::new(Day::Monday, 2)];
///
/// let generator = TimetableGenerator::seeded(assignments, vec![], slots, vec![], 42);
/// let entries = generator.generate().expect("feasible");
/// assert_eq!(entries.len(), 2);
/// ```
#[derive(Debug)]
pub struct TimetableGenerator<R: Rng = StdRng> {
    assignments: Vec<Assignment>,
    constraints: Vec<TeacherConstraint>,
    slots: Vec<Slot>,
    rooms: Vec<Room>,
    rng: R,
}

impl TimetableGenerator<StdRng> {
    /// Creates a generator with an OS-seeded RNG.
    ///
    /// Repeated calls on identical input explore different orderings and
    /// may produce different (equally valid) schedules.
    pub fn new(
        assignments: Vec<Assignment>,
        constraints: Vec<TeacherConstraint>,
        slots: Vec<Slot>,
        rooms: Vec<Room>,
    ) -> Self {
        Self::with_rng(assignments, constraints, slots, rooms, StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed, for reproducible runs.
    pub fn seeded(
        assignments: Vec<Assignment>,
        constraints: Vec<TeacherConstraint>,
        slots: Vec<Slot>,
        rooms: Vec<Room>,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            assignments,
            constraints,
            slots,
            rooms,
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> TimetableGenerator<R> {
    /// Creates a generator with a caller-supplied RNG.
    pub fn with_rng(
        assignments: Vec<Assignment>,
        constraints: Vec<TeacherConstraint>,
        slots: Vec<Slot>,
        rooms: Vec<Room>,
        rng: R,
    ) -> Self {
        Self {
            assignments,
            constraints,
            slots,
            rooms,
            rng,
        }
    }

    /// Runs the search.
    ///
    /// Returns every atomic unit placed (one entry per unit, sorted by
    /// day, period, class), or `None` when the search tree was exhausted
    /// without a complete conflict-free placement. `None` does not
    /// distinguish "provably infeasible" from "this attempt failed";
    /// the two are conflated by design.
    pub fn generate(mut self) -> Option<Vec<TimetableEntry>> {
        let mut units: Vec<AtomicUnit> = Vec::new();
        for assignment in &self.assignments {
            for _ in 0..assignment.periods_per_week {
                units.push(AtomicUnit::from_assignment(assignment));
            }
        }
        debug!(
            "flattened {} assignments into {} placement units over {} slots and {} rooms",
            self.assignments.len(),
            units.len(),
            self.slots.len(),
            self.rooms.len()
        );

        units.shuffle(&mut self.rng);

        let mut state = SearchState::default();
        if self.solve(&units, 0, &mut state) {
            let mut entries: Vec<TimetableEntry> = state.grid.into_values().collect();
            entries.sort_by(|a, b| {
                (a.day, a.period_index, &a.class_id).cmp(&(b.day, b.period_index, &b.class_id))
            });
            info!("placed all {} units", entries.len());
            Some(entries)
        } else {
            info!("search exhausted; no feasible placement for {} units", units.len());
            None
        }
    }

    /// Places `units[index..]`, backtracking on failure.
    fn solve(&mut self, units: &[AtomicUnit], index: usize, state: &mut SearchState) -> bool {
        if index >= units.len() {
            return true;
        }
        let unit = &units[index];

        // Fresh slot order per node; this is the variation source.
        let mut slot_order = self.slots.clone();
        slot_order.shuffle(&mut self.rng);

        for slot in slot_order {
            if !self.is_safe(unit, slot, state) {
                continue;
            }

            let room_id = self
                .find_available_room(unit, slot, state)
                .map(|room| room.id.clone());
            // Labs must have a lab room; theory tolerates going room-less.
            if room_id.is_none() && unit.subject_type == SubjectType::Lab {
                continue;
            }

            state.place(unit, slot, room_id.clone());
            if self.solve(units, index + 1, state) {
                return true;
            }
            state.unplace(unit, slot, room_id.as_deref());
        }

        false
    }

    /// Whether the unit's class and teacher are free at the slot and no
    /// unavailability constraint blocks the teacher there.
    fn is_safe(&self, unit: &AtomicUnit, slot: Slot, state: &SearchState) -> bool {
        if state.class_occupied(slot, &unit.class_id) {
            return false;
        }
        if state.teacher_occupied(slot, &unit.teacher_id) {
            return false;
        }
        !self
            .constraints
            .iter()
            .any(|c| c.blocks(&unit.teacher_id, slot))
    }

    /// First free room of the required type, in inventory order.
    fn find_available_room(
        &self,
        unit: &AtomicUnit,
        slot: Slot,
        state: &SearchState,
    ) -> Option<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.suits(unit.subject_type))
            .find(|room| !state.room_occupied(slot, &room.id))
    }
}
