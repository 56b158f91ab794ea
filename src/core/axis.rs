//! Minute-of-day axis: every `"HH:MM"` of a day mapped to `0..=1439`.
//!
//! The table is built once and only read afterwards. A visible window such
//! as 05:00-21:00 is a filtered view of it, never a different table. The
//! JSON cache file is a memo of [`AxisTable::build`] and can be deleted at
//! any time.

use crate::errors::{AppError, AppResult};
use crate::models::break_duration::BreakDuration;
use crate::models::time_of_day::TimeOfDay;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Number of slots on the axis.
pub const AXIS_LEN: u16 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTable {
    labels: Vec<String>,
    offsets: HashMap<String, u16>,
}

impl AxisTable {
    /// Enumerate hour 0..23, minute 0..59 and number them in that order.
    pub fn build() -> Self {
        let mut labels = Vec::with_capacity(AXIS_LEN as usize);
        let mut offsets = HashMap::with_capacity(AXIS_LEN as usize);
        let mut counter: u16 = 0;

        for hour in 0..24 {
            for minute in 0..60 {
                let label = format!("{:02}:{:02}", hour, minute);
                offsets.insert(label.clone(), counter);
                labels.push(label);
                counter += 1;
            }
        }

        Self { labels, offsets }
    }

    /// Look up a canonical `HH:MM` string.
    pub fn offset_of(&self, time: &str) -> AppResult<u16> {
        self.offsets
            .get(time)
            .copied()
            .ok_or_else(|| AppError::UnknownTime(time.to_string()))
    }

    /// Axis coordinate of a clock reading.
    pub fn time_offset(&self, time: TimeOfDay) -> u16 {
        time.minute_of_day()
    }

    /// Axis coordinate of a break length, read as if it were a clock time.
    pub fn break_offset(&self, duration: BreakDuration) -> u16 {
        // BreakDuration is bounded below AXIS_LEN on construction
        duration.minutes() as u16
    }

    pub fn label_of(&self, offset: u16) -> Option<&str> {
        self.labels.get(offset as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entries with `start <= offset < stop`, ascending.
    pub fn window(&self, start: u16, stop: u16) -> impl Iterator<Item = (&str, u16)> {
        let stop = stop.min(AXIS_LEN);
        self.labels
            .iter()
            .enumerate()
            .skip(start as usize)
            .take(stop.saturating_sub(start) as usize)
            .map(|(i, l)| (l.as_str(), i as u16))
    }

    /// Read the cache file, rebuilding (and rewriting) it when missing or stale.
    pub fn load_or_build(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            match serde_json::from_str::<BTreeMap<String, u16>>(&content) {
                Ok(map) => {
                    if let Some(table) = Self::from_map(map) {
                        debug!(path = %path.display(), "axis table loaded from cache");
                        return Ok(table);
                    }
                    warn!(path = %path.display(), "axis cache is inconsistent, rebuilding");
                }
                Err(e) => warn!(path = %path.display(), error = %e, "axis cache unreadable, rebuilding"),
            }
        } else {
            debug!(path = %path.display(), "axis cache missing, generating");
        }

        let table = Self::build();
        table.save(path)?;
        Ok(table)
    }

    /// Write the `{"HH:MM": offset}` cache. Zero-padded labels sort chronologically.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let map: BTreeMap<&str, u16> = self.offsets.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        fs::write(path, serde_json::to_string(&map)?)?;
        Ok(())
    }

    fn from_map(map: BTreeMap<String, u16>) -> Option<Self> {
        let built = Self::build();
        let consistent = map.len() == built.len()
            && map
                .iter()
                .all(|(label, offset)| built.offsets.get(label) == Some(offset));
        consistent.then_some(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn build_is_a_bijection_over_the_day() {
        let table = AxisTable::build();
        assert_eq!(table.len(), 1440);

        let mut seen = HashSet::new();
        for hour in 0..24 {
            for minute in 0..60 {
                let off = table.offset_of(&format!("{:02}:{:02}", hour, minute)).unwrap();
                assert!(seen.insert(off));
            }
        }
        assert_eq!(seen.len(), 1440);
        assert_eq!(seen.iter().min(), Some(&0));
        assert_eq!(seen.iter().max(), Some(&1439));
    }

    #[test]
    fn label_and_offset_round_trip() {
        let table = AxisTable::build();
        for n in 0..AXIS_LEN {
            let label = table.label_of(n).unwrap();
            assert_eq!(table.offset_of(label).unwrap(), n);
        }
        assert!(table.label_of(AXIS_LEN).is_none());
    }

    #[test]
    fn rebuild_is_identical() {
        assert_eq!(AxisTable::build(), AxisTable::build());
    }

    #[test]
    fn unknown_times_are_rejected() {
        let table = AxisTable::build();
        for bad in ["9:00", "24:00", "12:60", "", "noon"] {
            assert!(matches!(table.offset_of(bad), Err(AppError::UnknownTime(_))));
        }
    }

    #[test]
    fn typed_conversions_agree_with_the_table() {
        let table = AxisTable::build();
        let t: TimeOfDay = "17:20".parse().unwrap();
        let b: BreakDuration = "00:20".parse().unwrap();
        assert_eq!(table.time_offset(t), table.offset_of("17:20").unwrap());
        assert_eq!(table.break_offset(b), table.offset_of("00:20").unwrap());
    }

    #[test]
    fn window_filters_without_rebuilding() {
        let table = AxisTable::build();
        let view: Vec<_> = table.window(300, 1260).collect();
        assert_eq!(view.len(), 960);
        assert_eq!(view.first(), Some(&("05:00", 300)));
        assert_eq!(view.last(), Some(&("20:59", 1259)));
        assert_eq!(table.window(1400, 2000).count(), 40);
    }

    #[test]
    fn cache_file_is_regenerated_when_missing_or_stale() {
        let path = std::env::temp_dir().join("timereport_axis_cache_test.json");
        fs::remove_file(&path).ok();

        let table = AxisTable::load_or_build(&path).unwrap();
        assert!(path.exists());
        assert_eq!(AxisTable::load_or_build(&path).unwrap(), table);

        fs::write(&path, r#"{"00:00": 5}"#).unwrap();
        assert_eq!(AxisTable::load_or_build(&path).unwrap(), table);
        let rewritten: BTreeMap<String, u16> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rewritten.len(), 1440);
        assert_eq!(rewritten["23:59"], 1439);

        fs::remove_file(&path).ok();
    }
}
