//! Period timing templates.
//!
//! A [`PeriodTemplate`] is the ordered list of timed periods a school day is
//! divided into, including breaks. The slot universe handed to the
//! generator is derived from the template: one [`Slot`] per non-break
//! period per working day. Breaks consume no period ordinal.

use serde::{Deserialize, Serialize};

use super::{Day, Slot};

/// One timed entry of a day template: a teaching period or a break.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSlot {
    /// Display label, e.g. "Period 1", "Recess", "Assembly".
    pub label: String,
    /// Start time of day, e.g. "08:00".
    pub start_time: String,
    /// End time of day, e.g. "08:45".
    pub end_time: String,
    /// Breaks are excluded from slot construction.
    pub is_break: bool,
}

impl TimingSlot {
    /// Creates a teaching period.
    pub fn period(
        label: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_break: false,
        }
    }

    /// Creates a break entry.
    pub fn recess(
        label: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_break: true,
        }
    }
}

/// An ordered day template, e.g. "Regular Schedule" or "Friday Schedule".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodTemplate {
    /// Template name.
    pub name: String,
    /// Ordered timed entries, breaks included.
    pub slots: Vec<TimingSlot>,
    /// Whether this is the organization's default template.
    pub is_default: bool,
}

impl PeriodTemplate {
    /// Creates an empty template.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            is_default: false,
        }
    }

    /// Appends a timed entry.
    pub fn with_slot(mut self, slot: TimingSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Marks this template as the default.
    pub fn default_template(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Number of teaching (non-break) periods per day.
    pub fn periods_per_day(&self) -> u32 {
        self.slots.iter().filter(|s| !s.is_break).count() as u32
    }

    /// Builds the full slot universe: working days × non-break periods.
    ///
    /// `period_index` is assigned as the 1-based ordinal among non-break
    /// entries in template order; breaks consume no ordinal. Renderers must
    /// apply the same numbering for entries to line up with the template.
    pub fn build_slots(&self) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(Day::WORKING.len() * self.periods_per_day() as usize);
        for day in Day::WORKING {
            let mut period_index = 0u32;
            for timing in &self.slots {
                if timing.is_break {
                    continue;
                }
                period_index += 1;
                slots.push(Slot::new(day, period_index));
            }
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular_template() -> PeriodTemplate {
        PeriodTemplate::new("Regular Schedule")
            .with_slot(TimingSlot::period("Period 1", "08:00", "08:45"))
            .with_slot(TimingSlot::period("Period 2", "08:45", "09:30"))
            .with_slot(TimingSlot::recess("Recess", "09:30", "09:50"))
            .with_slot(TimingSlot::period("Period 3", "09:50", "10:35"))
            .default_template()
    }

    #[test]
    fn test_periods_per_day_excludes_breaks() {
        assert_eq!(regular_template().periods_per_day(), 3);
    }

    #[test]
    fn test_build_slots_covers_all_working_days() {
        let slots = regular_template().build_slots();
        assert_eq!(slots.len(), 6 * 3);
        for day in Day::WORKING {
            let per_day: Vec<_> = slots.iter().filter(|s| s.day == day).collect();
            assert_eq!(per_day.len(), 3);
        }
    }

    #[test]
    fn test_break_consumes_no_ordinal() {
        let slots = regular_template().build_slots();
        let monday: Vec<u32> = slots
            .iter()
            .filter(|s| s.day == Day::Monday)
            .map(|s| s.period_index)
            .collect();
        // Period 3 follows the recess but is still ordinal 3, not 4.
        assert_eq!(monday, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_template_builds_no_slots() {
        let template = PeriodTemplate::new("Empty");
        assert_eq!(template.periods_per_day(), 0);
        assert!(template.build_slots().is_empty());
    }

    #[test]
    fn test_all_breaks_builds_no_slots() {
        let template = PeriodTemplate::new("Holiday")
            .with_slot(TimingSlot::recess("Assembly", "08:00", "09:00"));
        assert!(template.build_slots().is_empty());
    }
}
