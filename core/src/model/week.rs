use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::slot::TimeSlot;

pub const DAYS_PER_WEEK: usize = 7;

/// One calendar day and its slot grid. Dates carry no time-of-day;
/// the slot order is chronological and identical across all days.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub time_slots: Vec<TimeSlot>,
}

impl DaySchedule {
    pub fn slot(&self, slot_id: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.id == slot_id)
    }
}

/// Seven consecutive days anchored at `week_start`. A week is always
/// rebuilt whole when the anchor moves; days are never patched in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WeekSchedule {
    pub week_start: NaiveDate,
    pub days: Vec<DaySchedule>,
}

impl WeekSchedule {
    /// Builds a fresh week from the slot template, one template copy per day,
    /// `days[i].date == week_start + i`.
    pub fn build(week_start: NaiveDate, template: &[TimeSlot]) -> Self {
        let days = (0..DAYS_PER_WEEK)
            .map(|i| DaySchedule {
                date: week_start + Days::new(i as u64),
                time_slots: template.to_vec(),
            })
            .collect();
        Self { week_start, days }
    }

    pub fn day(&self, index: usize) -> Option<&DaySchedule> {
        self.days.get(index)
    }
}
