//! Record store: date-keyed arrival/leaving/break entries.
//!
//! The engine only talks to [`RecordStore`]; [`JsonStore`] persists to the
//! JSON array file, [`RecordSet`] is the in-memory part it is built on.

pub mod json_store;
pub mod record_set;

pub use json_store::JsonStore;
pub use record_set::RecordSet;

use crate::errors::AppResult;
use crate::models::calendar_date::CalendarDate;
use crate::models::day_record::{DayRecord, StoredRecord};

pub trait RecordStore {
    /// Entry for `date`, or the `00:00`/`00:00` sentinel when none exists.
    fn get(&self, date: &CalendarDate) -> StoredRecord;

    /// Replace the entry with the same date, or append a new one.
    fn set(&mut self, record: &DayRecord) -> AppResult<()>;

    /// Dates having an entry within `[start, end]`, ascending.
    fn dates_in_range(&self, start: &CalendarDate, end: &CalendarDate) -> Vec<CalendarDate>;
}
