use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::week::WeekSchedule;

/// Persistence envelope for one owner's saved week.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredSchedule {
    pub id: Uuid,
    pub owner: String,
    pub week: WeekSchedule,
    pub saved_at: DateTime<Utc>,
}

impl StoredSchedule {
    pub fn new(owner: String, week: WeekSchedule) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            week,
            saved_at: Utc::now(),
        }
    }
}

/// Persistence boundary for weekly schedules. One stored week per owner;
/// `save` replaces any previous record for that owner.
pub trait ScheduleRepository {
    fn load(&self, owner: &str) -> Result<Option<StoredSchedule>>;
    fn save(&self, owner: &str, week: &WeekSchedule) -> Result<StoredSchedule>;
}
