use chrono::{Local, NaiveDate};

/// Injected clock so window-boundary logic never reads the wall clock
/// directly. Returning a bare date normalizes "today" to midnight by
/// construction.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Production clock: the current date in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date. Used by tests and by the CLI's
/// `--today` override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
