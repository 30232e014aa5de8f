use serde::{Deserialize, Serialize};

/// Default slot range observed in club schedules: 06:00 through 18:00.
pub const DEFAULT_START_HOUR: u32 = 6;
pub const DEFAULT_END_HOUR: u32 = 18;

/// One bookable hour of a day. The slot set is fixed per template;
/// only `is_available` ever changes, and only via `toggle_slot`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub is_available: bool,
}

impl TimeSlot {
    fn new(index: usize, hour: u32) -> Self {
        Self {
            id: format!("slot-{}", index),
            time: format!("{:02}:00", hour),
            is_available: false,
        }
    }
}

/// Builds the daily slot template: one slot per whole hour, both bounds
/// inclusive, everything initially unavailable. Callers are expected to
/// pass a sane range (start <= end, end < 24); the CLI validates user
/// input before it gets here.
pub fn build_template(start_hour: u32, end_hour_inclusive: u32) -> Vec<TimeSlot> {
    (start_hour..=end_hour_inclusive)
        .enumerate()
        .map(|(index, hour)| TimeSlot::new(index, hour))
        .collect()
}

/// Functional update: returns a copy of `slots` with the matching slot's
/// flag flipped, or `None` if the id does not exist. The caller decides
/// whether a missing id is an error; nothing is mutated in place.
pub fn toggle_slot(slots: &[TimeSlot], slot_id: &str) -> Option<Vec<TimeSlot>> {
    if !slots.iter().any(|s| s.id == slot_id) {
        return None;
    }
    Some(
        slots
            .iter()
            .map(|s| {
                let mut slot = s.clone();
                if slot.id == slot_id {
                    slot.is_available = !slot.is_available;
                }
                slot
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_covers_every_hour_inclusive() {
        let slots = build_template(DEFAULT_START_HOUR, DEFAULT_END_HOUR);
        assert_eq!(slots.len(), 13);
        assert_eq!(slots[0].id, "slot-0");
        assert_eq!(slots[0].time, "06:00");
        assert_eq!(slots[12].id, "slot-12");
        assert_eq!(slots[12].time, "18:00");
        assert!(slots.iter().all(|s| !s.is_available));
    }

    #[test]
    fn template_zero_pads_single_digit_hours() {
        let slots = build_template(8, 9);
        assert_eq!(slots[0].time, "08:00");
        assert_eq!(slots[1].time, "09:00");
    }

    #[test]
    fn toggle_flips_only_the_named_slot() {
        let slots = build_template(6, 18);
        let toggled = toggle_slot(&slots, "slot-3").unwrap();
        assert!(toggled[3].is_available);
        for (i, slot) in toggled.iter().enumerate() {
            if i != 3 {
                assert_eq!(slot, &slots[i]);
            }
        }
    }

    #[test]
    fn toggle_twice_is_identity() {
        let slots = build_template(6, 18);
        let once = toggle_slot(&slots, "slot-7").unwrap();
        let twice = toggle_slot(&once, "slot-7").unwrap();
        assert_eq!(twice, slots);
    }

    #[test]
    fn toggle_unknown_id_returns_none() {
        let slots = build_template(6, 18);
        assert!(toggle_slot(&slots, "slot-13").is_none());
        assert!(toggle_slot(&slots, "nonsense").is_none());
    }
}
