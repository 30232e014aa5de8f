use chrono::{Days, NaiveDate};

/// Default editing horizon: today plus 30 days, both ends inclusive.
pub const DEFAULT_HORIZON_DAYS: u64 = 30;

/// The rule bounding which dates may be edited and which week anchors may
/// be navigated to. Pure predicates over `(date, today)`; `today` must
/// already be a bare date so there is no time-of-day skew in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    pub horizon_days: u64,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl WindowPolicy {
    pub fn new(horizon_days: u64) -> Self {
        Self { horizon_days }
    }

    /// Last selectable date, inclusive.
    pub fn window_end(&self, today: NaiveDate) -> NaiveDate {
        today + Days::new(self.horizon_days)
    }

    /// A date is editable iff `today <= date <= today + horizon`.
    pub fn is_date_selectable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= today && date <= self.window_end(today)
    }

    /// Paging back is legal iff the new anchor would not precede today.
    pub fn is_previous_week_navigable(&self, week_start: NaiveDate, today: NaiveDate) -> bool {
        week_start - Days::new(7) >= today
    }

    /// Paging forward is legal iff the new anchor still leaves at least one
    /// selectable day in view (strictly before the window end).
    pub fn is_next_week_navigable(&self, week_start: NaiveDate, today: NaiveDate) -> bool {
        week_start + Days::new(7) < self.window_end(today)
    }
}
