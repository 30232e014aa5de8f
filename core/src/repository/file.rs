use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::week::WeekSchedule;
use crate::repository::traits::{ScheduleRepository, StoredSchedule};

const DEFAULT_FILE_NAME: &str = "schedules.json";

/// JSON-file store under `~/.slotbook/` (or a caller-supplied directory).
/// The whole file is read and rewritten per operation; schedules are tiny
/// and single-owner, so there is no point in anything cleverer.
#[derive(Clone)]
pub struct FileScheduleRepository {
    file_path: PathBuf,
}

impl FileScheduleRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".slotbook")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<StoredSchedule>::new())?;
            writer.flush()?;
        }

        Ok(FileScheduleRepository { file_path: path })
    }

    fn read_all(&self) -> Result<Vec<StoredSchedule>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let records = serde_json::from_reader(reader)?;
        Ok(records)
    }

    fn write_all(&self, records: &[StoredSchedule]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }
}

impl ScheduleRepository for FileScheduleRepository {
    fn load(&self, owner: &str) -> Result<Option<StoredSchedule>> {
        let records = self.read_all()?;
        Ok(records.into_iter().find(|r| r.owner == owner))
    }

    fn save(&self, owner: &str, week: &WeekSchedule) -> Result<StoredSchedule> {
        let mut records = self.read_all()?;
        let record = StoredSchedule::new(owner.to_string(), week.clone());
        records.retain(|r| r.owner != owner);
        records.push(record.clone());
        self.write_all(&records)?;
        Ok(record)
    }
}
