use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};

use crate::model::week::WeekSchedule;
use crate::repository::traits::{ScheduleRepository, StoredSchedule};

/// In-memory store keyed by owner. Backs the controller tests and any
/// embedder that does not want files on disk.
#[derive(Default)]
pub struct MemoryScheduleRepository {
    records: Mutex<HashMap<String, StoredSchedule>>,
}

impl MemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleRepository for MemoryScheduleRepository {
    fn load(&self, owner: &str) -> Result<Option<StoredSchedule>> {
        let records = self
            .records
            .lock()
            .map_err(|_| anyhow!("schedule store poisoned"))?;
        Ok(records.get(owner).cloned())
    }

    fn save(&self, owner: &str, week: &WeekSchedule) -> Result<StoredSchedule> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| anyhow!("schedule store poisoned"))?;
        let record = StoredSchedule::new(owner.to_string(), week.clone());
        records.insert(owner.to_string(), record.clone());
        Ok(record)
    }
}
