use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by the schedule controller. Policy rejections are
/// recoverable by construction: the controller guarantees no state was
/// mutated when one is returned.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("policy violation: {0}")]
    Policy(#[from] PolicyViolation),

    #[error("unknown slot id '{0}'")]
    UnknownSlot(String),

    #[error("day index {index} out of range (weeks have {len} days)")]
    DayIndexOutOfRange { index: usize, len: usize },

    #[error("persistence error: {0}")]
    Persistence(#[source] anyhow::Error),
}

impl ScheduleError {
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, ScheduleError::Policy(_))
    }
}

/// An attempted transition outside the selectable window.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("{date} is outside the editable window ({today} to {window_end})")]
    DateOutsideWindow {
        date: NaiveDate,
        today: NaiveDate,
        window_end: NaiveDate,
    },

    #[error("previous week would start before today ({today})")]
    BeforeCurrentWeek { today: NaiveDate },

    #[error("next week would start past the editable window ending {window_end}")]
    PastHorizon { window_end: NaiveDate },
}
