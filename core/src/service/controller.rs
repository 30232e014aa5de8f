use chrono::{Days, NaiveDate};

use crate::error::{PolicyViolation, ScheduleError};
use crate::model::slot::{toggle_slot, TimeSlot};
use crate::model::week::WeekSchedule;
use crate::policy::WindowPolicy;
use crate::repository::traits::{ScheduleRepository, StoredSchedule};
use crate::time::Clock;

/// Single owner of the current week state. All mutation goes through the
/// policy first; a rejected transition returns an error and leaves the
/// week untouched, even when the caller bypassed the UI's disabled state.
///
/// `today` is captured once from the injected clock at construction, so
/// every boundary check in the controller's lifetime compares against the
/// same normalized date.
pub struct ScheduleController<R: ScheduleRepository> {
    repo: R,
    owner: String,
    policy: WindowPolicy,
    today: NaiveDate,
    template: Vec<TimeSlot>,
    week: WeekSchedule,
}

impl<R: ScheduleRepository> ScheduleController<R> {
    /// Anchors the week at today (rolling-week convention) and overlays any
    /// availability previously saved for the same anchor.
    pub fn new(
        repo: R,
        owner: impl Into<String>,
        clock: &impl Clock,
        policy: WindowPolicy,
        template: Vec<TimeSlot>,
    ) -> Result<Self, ScheduleError> {
        let owner = owner.into();
        let today = clock.today();
        let week = Self::hydrate(&repo, &owner, today, &template)?;
        Ok(Self {
            repo,
            owner,
            policy,
            today,
            template,
            week,
        })
    }

    pub fn week(&self) -> &WeekSchedule {
        &self.week
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week.week_start
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn policy(&self) -> &WindowPolicy {
        &self.policy
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Disabled-state hint for the UI; `previous_week` re-checks regardless.
    pub fn can_go_previous(&self) -> bool {
        self.policy
            .is_previous_week_navigable(self.week.week_start, self.today)
    }

    /// Disabled-state hint for the UI; `next_week` re-checks regardless.
    pub fn can_go_next(&self) -> bool {
        self.policy
            .is_next_week_navigable(self.week.week_start, self.today)
    }

    pub fn previous_week(&mut self) -> Result<(), ScheduleError> {
        if !self.can_go_previous() {
            return Err(PolicyViolation::BeforeCurrentWeek { today: self.today }.into());
        }
        self.rebuild_at(self.week.week_start - Days::new(7))
    }

    pub fn next_week(&mut self) -> Result<(), ScheduleError> {
        if !self.can_go_next() {
            return Err(PolicyViolation::PastHorizon {
                window_end: self.policy.window_end(self.today),
            }
            .into());
        }
        self.rebuild_at(self.week.week_start + Days::new(7))
    }

    /// Flips one slot on one day. Rejects a bad day index, a day outside
    /// the selectable window, and an unknown slot id; none of these leave
    /// any trace in the week.
    pub fn toggle_slot(&mut self, day_index: usize, slot_id: &str) -> Result<(), ScheduleError> {
        let len = self.week.days.len();
        let day = self
            .week
            .days
            .get(day_index)
            .ok_or(ScheduleError::DayIndexOutOfRange {
                index: day_index,
                len,
            })?;
        if !self.policy.is_date_selectable(day.date, self.today) {
            return Err(PolicyViolation::DateOutsideWindow {
                date: day.date,
                today: self.today,
                window_end: self.policy.window_end(self.today),
            }
            .into());
        }
        let toggled = toggle_slot(&day.time_slots, slot_id)
            .ok_or_else(|| ScheduleError::UnknownSlot(slot_id.to_string()))?;
        self.week.days[day_index].time_slots = toggled;
        Ok(())
    }

    /// Hands the current week to the repository. No retry, no rollback;
    /// failures come back as a distinct error value for the caller.
    pub fn save(&self) -> Result<StoredSchedule, ScheduleError> {
        self.repo
            .save(&self.owner, &self.week)
            .map_err(ScheduleError::Persistence)
    }

    /// Weeks are regenerated whole on every anchor change: fresh template
    /// copies, then saved flags overlaid when the stored anchor matches.
    /// Unsaved toggles do not survive navigation.
    fn rebuild_at(&mut self, week_start: NaiveDate) -> Result<(), ScheduleError> {
        self.week = Self::hydrate(&self.repo, &self.owner, week_start, &self.template)?;
        Ok(())
    }

    fn hydrate(
        repo: &R,
        owner: &str,
        week_start: NaiveDate,
        template: &[TimeSlot],
    ) -> Result<WeekSchedule, ScheduleError> {
        let mut week = WeekSchedule::build(week_start, template);
        let stored = repo.load(owner).map_err(ScheduleError::Persistence)?;
        if let Some(record) = stored {
            if record.week.week_start == week_start {
                apply_saved_flags(&mut week, &record.week);
            }
        }
        Ok(week)
    }
}

/// Copies availability flags slot-id by slot-id so a reconfigured hour
/// range cannot resurrect slots that no longer exist in the template.
fn apply_saved_flags(week: &mut WeekSchedule, saved: &WeekSchedule) {
    for (day, saved_day) in week.days.iter_mut().zip(&saved.days) {
        for slot in day.time_slots.iter_mut() {
            if let Some(saved_slot) = saved_day.slot(&slot.id) {
                slot.is_available = saved_slot.is_available;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::slot::build_template;
    use crate::repository::memory::MemoryScheduleRepository;
    use crate::time::FixedClock;
    use anyhow::anyhow;

    const OWNER: &str = "trainer:alice";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller() -> ScheduleController<MemoryScheduleRepository> {
        controller_with_repo(MemoryScheduleRepository::new())
    }

    fn controller_with_repo(
        repo: MemoryScheduleRepository,
    ) -> ScheduleController<MemoryScheduleRepository> {
        ScheduleController::new(
            repo,
            OWNER,
            &FixedClock(date(2024, 6, 1)),
            WindowPolicy::default(),
            build_template(6, 18),
        )
        .unwrap()
    }

    #[test]
    fn starts_anchored_at_today_with_a_blank_week() {
        let ctrl = controller();
        assert_eq!(ctrl.week_start(), date(2024, 6, 1));
        assert_eq!(ctrl.week().days.len(), 7);
        assert!(ctrl
            .week()
            .days
            .iter()
            .flat_map(|d| &d.time_slots)
            .all(|s| !s.is_available));
    }

    #[test]
    fn previous_from_the_current_week_is_rejected_without_mutation() {
        let mut ctrl = controller();
        let before = ctrl.week().clone();

        let err = ctrl.previous_week().unwrap_err();
        assert!(err.is_policy_violation());
        assert!(!ctrl.can_go_previous());
        assert_eq!(ctrl.week(), &before);
    }

    #[test]
    fn next_then_previous_returns_to_the_original_state() {
        let mut ctrl = controller();
        let original = ctrl.week().clone();

        ctrl.next_week().unwrap();
        assert_eq!(ctrl.week_start(), date(2024, 6, 8));
        assert!(ctrl.can_go_previous());

        ctrl.previous_week().unwrap();
        assert_eq!(ctrl.week(), &original);
    }

    #[test]
    fn forward_paging_stops_at_the_horizon_week() {
        let mut ctrl = controller();
        for _ in 0..4 {
            ctrl.next_week().unwrap();
        }
        // 2024-06-29 is the last legal anchor: one more week would start at
        // 2024-07-06, past the window ending 2024-07-01.
        assert_eq!(ctrl.week_start(), date(2024, 6, 29));
        assert!(!ctrl.can_go_next());

        let before = ctrl.week().clone();
        let err = ctrl.next_week().unwrap_err();
        assert!(err.is_policy_violation());
        assert_eq!(ctrl.week(), &before);
    }

    #[test]
    fn toggle_flips_exactly_one_slot() {
        let mut ctrl = controller();
        ctrl.toggle_slot(2, "slot-3").unwrap();

        for (di, day) in ctrl.week().days.iter().enumerate() {
            for (si, slot) in day.time_slots.iter().enumerate() {
                assert_eq!(slot.is_available, di == 2 && si == 3);
            }
        }
    }

    #[test]
    fn toggle_outside_the_window_leaves_the_week_unchanged() {
        let mut ctrl = controller();
        for _ in 0..4 {
            ctrl.next_week().unwrap();
        }
        // Anchor 2024-06-29: day index 3 is 2024-07-02, one past the window end.
        let before = ctrl.week().clone();
        let err = ctrl.toggle_slot(3, "slot-0").unwrap_err();
        assert!(err.is_policy_violation());
        assert_eq!(ctrl.week(), &before);

        // The window end itself (2024-07-01, index 2) is still editable.
        ctrl.toggle_slot(2, "slot-0").unwrap();
        assert!(ctrl.week().days[2].time_slots[0].is_available);
    }

    #[test]
    fn toggle_with_an_unknown_slot_id_is_an_error_without_mutation() {
        let mut ctrl = controller();
        let before = ctrl.week().clone();

        let err = ctrl.toggle_slot(0, "slot-13").unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownSlot(_)));
        assert_eq!(ctrl.week(), &before);
    }

    #[test]
    fn toggle_with_a_bad_day_index_is_an_error_without_mutation() {
        let mut ctrl = controller();
        let before = ctrl.week().clone();

        let err = ctrl.toggle_slot(7, "slot-0").unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::DayIndexOutOfRange { index: 7, len: 7 }
        ));
        assert_eq!(ctrl.week(), &before);
    }

    #[test]
    fn saved_flags_survive_navigation_away_and_back() {
        let mut ctrl = controller();
        ctrl.toggle_slot(0, "slot-5").unwrap();
        ctrl.save().unwrap();

        ctrl.next_week().unwrap();
        assert!(!ctrl.week().days[0].time_slots[5].is_available);

        ctrl.previous_week().unwrap();
        assert!(ctrl.week().days[0].time_slots[5].is_available);
    }

    #[test]
    fn unsaved_toggles_are_lost_on_navigation() {
        let mut ctrl = controller();
        ctrl.toggle_slot(0, "slot-5").unwrap();

        ctrl.next_week().unwrap();
        ctrl.previous_week().unwrap();
        assert!(!ctrl.week().days[0].time_slots[5].is_available);
    }

    #[test]
    fn a_saved_week_for_a_different_anchor_is_ignored() {
        let mut ctrl = controller();
        ctrl.toggle_slot(0, "slot-5").unwrap();
        ctrl.save().unwrap();

        // Re-anchor a week later: the stored week belongs to 2024-06-01
        // and must not bleed into 2024-06-08.
        ctrl.next_week().unwrap();
        assert!(ctrl
            .week()
            .days
            .iter()
            .flat_map(|d| &d.time_slots)
            .all(|s| !s.is_available));
    }

    #[test]
    fn hydration_drops_flags_for_slots_outside_a_narrower_template() {
        // Save a week where slot-12 (18:00) is available.
        let repo = MemoryScheduleRepository::new();
        let template = build_template(6, 18);
        let mut week = WeekSchedule::build(date(2024, 6, 1), &template);
        week.days[0].time_slots[12].is_available = true;
        week.days[0].time_slots[3].is_available = true;
        repo.save(OWNER, &week).unwrap();

        // Rebuild with a template that ends at 17:00: slot-12 is gone and
        // the remaining flags still line up by id.
        let ctrl = ScheduleController::new(
            repo,
            OWNER,
            &FixedClock(date(2024, 6, 1)),
            WindowPolicy::default(),
            build_template(6, 17),
        )
        .unwrap();
        assert_eq!(ctrl.week().days[0].time_slots.len(), 12);
        assert!(ctrl.week().days[0].slot("slot-12").is_none());
        assert!(ctrl.week().days[0].time_slots[3].is_available);
    }

    struct FailingRepository;

    impl ScheduleRepository for FailingRepository {
        fn load(&self, _owner: &str) -> anyhow::Result<Option<StoredSchedule>> {
            Ok(None)
        }

        fn save(&self, _owner: &str, _week: &WeekSchedule) -> anyhow::Result<StoredSchedule> {
            Err(anyhow!("disk full"))
        }
    }

    #[test]
    fn persistence_failures_surface_as_a_distinct_error() {
        let ctrl = ScheduleController::new(
            FailingRepository,
            OWNER,
            &FixedClock(date(2024, 6, 1)),
            WindowPolicy::default(),
            build_template(6, 18),
        )
        .unwrap();

        let err = ctrl.save().unwrap_err();
        assert!(matches!(err, ScheduleError::Persistence(_)));
        assert!(!err.is_policy_violation());
    }
}
