use chrono::{Datelike, NaiveDate};

use crate::model::slot::TimeSlot;
use crate::model::week::WeekSchedule;
use crate::policy::WindowPolicy;

/// Presentation flattening of one day: the UI layers render from this
/// instead of re-deriving selectability themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub date: NaiveDate,
    pub weekday: String,
    pub is_today: bool,
    pub selectable: bool,
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekView {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub label: String,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub days: Vec<DayView>,
}

impl WeekView {
    pub fn build(week: &WeekSchedule, policy: &WindowPolicy, today: NaiveDate) -> Self {
        let days: Vec<DayView> = week
            .days
            .iter()
            .map(|day| DayView {
                date: day.date,
                weekday: day.date.format("%a").to_string(),
                is_today: day.date == today,
                selectable: policy.is_date_selectable(day.date, today),
                time_slots: day.time_slots.clone(),
            })
            .collect();
        let week_end = days.last().map(|d| d.date).unwrap_or(week.week_start);
        Self {
            week_start: week.week_start,
            week_end,
            label: range_label(week.week_start, week_end),
            can_go_previous: policy.is_previous_week_navigable(week.week_start, today),
            can_go_next: policy.is_next_week_navigable(week.week_start, today),
            days,
        }
    }
}

fn range_label(start: NaiveDate, end: NaiveDate) -> String {
    if start.month() == end.month() {
        format!(
            "{} - {}",
            start.format("%b %-d"),
            end.format("%-d, %Y")
        )
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
    }
}
