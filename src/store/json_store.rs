use super::{RecordSet, RecordStore};
use crate::errors::AppResult;
use crate::models::calendar_date::CalendarDate;
use crate::models::day_record::{DayRecord, StoredRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Record store persisted as a JSON array of
/// `{"date", "from", "to", "break"}` objects.
///
/// The whole file is read on open and rewritten on every `set`.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    set: RecordSet,
}

impl JsonStore {
    /// Open the store; a missing or blank file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let records: Vec<StoredRecord> = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            debug!(path = %path.display(), "record file missing, starting empty");
            Vec::new()
        };

        info!(path = %path.display(), records = records.len(), "record store opened");

        Ok(Self {
            path,
            set: RecordSet::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[StoredRecord] {
        self.set.records()
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self.set.records())?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn get(&self, date: &CalendarDate) -> StoredRecord {
        self.set.get(date)
    }

    fn set(&mut self, record: &DayRecord) -> AppResult<()> {
        let replaced = self.set.upsert(record);
        self.flush()?;
        info!(date = %record.date, replaced, "record written");
        Ok(())
    }

    fn dates_in_range(&self, start: &CalendarDate, end: &CalendarDate) -> Vec<CalendarDate> {
        self.set.dates_in_range(start, end)
    }
}
