use super::RecordStore;
use crate::errors::AppResult;
use crate::models::calendar_date::CalendarDate;
use crate::models::day_record::{DayRecord, StoredRecord};
use tracing::debug;

/// Entries in file order. Lookups are linear; a store holds a few hundred days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<StoredRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<StoredRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace-or-append without persisting; returns true when an entry was replaced.
    pub fn upsert(&mut self, record: &DayRecord) -> bool {
        let stored = StoredRecord::from(record);
        match self.records.iter_mut().find(|r| r.date == stored.date) {
            Some(existing) => {
                *existing = stored;
                true
            }
            None => {
                self.records.push(stored);
                false
            }
        }
    }
}

impl RecordStore for RecordSet {
    fn get(&self, date: &CalendarDate) -> StoredRecord {
        let key = date.to_string();
        match self.records.iter().find(|r| r.date == key) {
            Some(r) => r.clone(),
            None => {
                debug!(date = %key, "no record, using 00:00/00:00");
                StoredRecord::sentinel(date)
            }
        }
    }

    fn set(&mut self, record: &DayRecord) -> AppResult<()> {
        self.upsert(record);
        Ok(())
    }

    fn dates_in_range(&self, start: &CalendarDate, end: &CalendarDate) -> Vec<CalendarDate> {
        let mut dates: Vec<CalendarDate> = self
            .records
            .iter()
            .filter_map(|r| r.date.parse::<CalendarDate>().ok())
            .filter(|d| d >= start && d <= end)
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(date: &str, from: &str, to: &str) -> StoredRecord {
        StoredRecord {
            date: date.into(),
            from: from.into(),
            to: to.into(),
            break_time: "00:00".into(),
        }
    }

    fn d(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn get_defaults_to_sentinel() {
        let set = RecordSet::default();
        let r = set.get(&d("2020.03.08."));
        assert_eq!(r, StoredRecord::sentinel(&d("2020.03.08.")));
    }

    #[test]
    fn set_replaces_by_date() {
        let mut set = RecordSet::new(vec![stored("2020.03.09.", "08:00", "16:00")]);
        let updated = stored("2020.03.09.", "09:00", "17:00").parse().unwrap();
        assert!(set.upsert(&updated));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&d("2020.03.09.")).from, "09:00");

        let fresh = stored("2020.03.10.", "09:00", "17:00").parse().unwrap();
        set.set(&fresh).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn dates_in_range_are_sorted_and_bounded() {
        let set = RecordSet::new(vec![
            stored("2020.03.12.", "08:00", "16:00"),
            stored("2020.03.02.", "08:00", "16:00"),
            stored("2020.02.28.", "08:00", "16:00"),
            stored("garbage", "08:00", "16:00"),
            stored("2020.03.05.", "08:00", "16:00"),
        ]);
        assert_eq!(
            set.dates_in_range(&d("2020.03.01."), &d("2020.03.12.")),
            vec![d("2020.03.02."), d("2020.03.05."), d("2020.03.12.")]
        );
    }
}
