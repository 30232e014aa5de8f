pub mod error;
pub mod model;
pub mod policy;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{PolicyViolation, ScheduleError};
pub use model::{
    build_template, toggle_slot, DaySchedule, TimeSlot, WeekSchedule, DAYS_PER_WEEK,
    DEFAULT_END_HOUR, DEFAULT_START_HOUR,
};
pub use policy::{WindowPolicy, DEFAULT_HORIZON_DAYS};
pub use repository::{FileScheduleRepository, MemoryScheduleRepository, ScheduleRepository, StoredSchedule};
pub use service::{DayView, ScheduleController, WeekView};
pub use time::{Clock, FixedClock, SystemClock};
