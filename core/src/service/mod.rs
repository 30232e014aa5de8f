pub mod controller;
pub mod dto;

pub use controller::ScheduleController;
pub use dto::{DayView, WeekView};
