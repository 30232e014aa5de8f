pub mod slot;
pub mod week;

pub use slot::{build_template, toggle_slot, TimeSlot, DEFAULT_END_HOUR, DEFAULT_START_HOUR};
pub use week::{DaySchedule, WeekSchedule, DAYS_PER_WEEK};
