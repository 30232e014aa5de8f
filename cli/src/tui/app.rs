use slotbook_core::{FileScheduleRepository, ScheduleController, WeekView};

const HELP: &str = "arrows/hjkl: move | space: toggle | n/p: week | s: save | q: quit";

/// TUI state: the controller plus a cursor over the day/slot grid and a
/// one-line status echoing the outcome of the last action. Policy
/// rejections land in the status line; they never crash the loop.
pub struct App {
    controller: ScheduleController<FileScheduleRepository>,
    selected_day: usize,
    selected_slot: usize,
    pub status: String,
    pub dirty: bool,
}

impl App {
    pub fn new(controller: ScheduleController<FileScheduleRepository>) -> App {
        App {
            controller,
            selected_day: 0,
            selected_slot: 0,
            status: HELP.to_string(),
            dirty: false,
        }
    }

    pub fn view(&self) -> WeekView {
        WeekView::build(
            self.controller.week(),
            self.controller.policy(),
            self.controller.today(),
        )
    }

    pub fn owner(&self) -> &str {
        self.controller.owner()
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.selected_day, self.selected_slot)
    }

    fn slot_count(&self) -> usize {
        self.controller
            .week()
            .days
            .first()
            .map(|d| d.time_slots.len())
            .unwrap_or(0)
    }

    pub fn move_left(&mut self) {
        let days = self.controller.week().days.len();
        if days == 0 {
            return;
        }
        self.selected_day = if self.selected_day == 0 {
            days - 1
        } else {
            self.selected_day - 1
        };
    }

    pub fn move_right(&mut self) {
        let days = self.controller.week().days.len();
        if days == 0 {
            return;
        }
        self.selected_day = (self.selected_day + 1) % days;
    }

    pub fn move_up(&mut self) {
        let slots = self.slot_count();
        if slots == 0 {
            return;
        }
        self.selected_slot = if self.selected_slot == 0 {
            slots - 1
        } else {
            self.selected_slot - 1
        };
    }

    pub fn move_down(&mut self) {
        let slots = self.slot_count();
        if slots == 0 {
            return;
        }
        self.selected_slot = (self.selected_slot + 1) % slots;
    }

    pub fn toggle_selected(&mut self) {
        let slot_id = match self
            .controller
            .week()
            .day(self.selected_day)
            .and_then(|d| d.time_slots.get(self.selected_slot))
        {
            Some(slot) => slot.id.clone(),
            None => return,
        };

        match self.controller.toggle_slot(self.selected_day, &slot_id) {
            Ok(()) => {
                self.dirty = true;
                self.status = "Toggled (unsaved)".to_string();
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    pub fn next_week(&mut self) {
        let was_dirty = self.dirty;
        match self.controller.next_week() {
            Ok(()) => self.after_navigation(was_dirty),
            Err(e) => self.status = e.to_string(),
        }
    }

    pub fn previous_week(&mut self) {
        let was_dirty = self.dirty;
        match self.controller.previous_week() {
            Ok(()) => self.after_navigation(was_dirty),
            Err(e) => self.status = e.to_string(),
        }
    }

    pub fn save(&mut self) {
        match self.controller.save() {
            Ok(record) => {
                self.dirty = false;
                self.status = format!("Saved (record {})", record.id);
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn after_navigation(&mut self, had_unsaved: bool) {
        // Weeks are rebuilt whole on navigation, so unsaved toggles are gone.
        self.dirty = false;
        self.status = if had_unsaved {
            "Unsaved changes discarded by week change".to_string()
        } else {
            HELP.to_string()
        };
    }
}
