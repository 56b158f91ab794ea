use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::ReportRow;
use crate::export::notify_export_success;
use crate::models::calendar_date::CalendarDate;
use crate::store::RecordStore;
use crate::utils::date::generate_range;
use std::path::Path;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// One row per date of `[start, end]`, in order.
    ///
    /// Unlike charts, exports are not limited to 31 days.
    pub fn rows(
        store: &impl RecordStore,
        start: &CalendarDate,
        end: &CalendarDate,
    ) -> AppResult<Vec<ReportRow>> {
        if end < start {
            return Err(AppError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(generate_range(start, end)
            .iter()
            .map(|d| ReportRow::from(store.get(d)))
            .collect())
    }

    pub fn export(
        store: &impl RecordStore,
        start: &CalendarDate,
        end: &CalendarDate,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        let rows = Self::rows(store, start, end)?;

        ensure_writable(file, force)?;
        if let Some(parent) = file.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::Export(format!(
                "directory {} does not exist",
                parent.display()
            )));
        }

        write_json(file, &rows)?;
        info!(file = %file.display(), rows = rows.len(), "report exported");
        notify_export_success(rows.len(), file);
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_record::StoredRecord;
    use crate::store::RecordSet;

    fn d(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn rows_cover_every_date_with_sentinels() {
        let store = RecordSet::new(vec![StoredRecord {
            date: "2020.03.03.".into(),
            from: "08:00".into(),
            to: "16:30".into(),
            break_time: "00:30".into(),
        }]);
        let rows = ExportLogic::rows(&store, &d("2020.03.02."), &d("2020.03.04.")).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].arriving, "00:00");
        assert_eq!(rows[1].leaving, "16:30");
        assert_eq!(rows[1].break_time, "00:30");
        assert_eq!(rows[2].date, "2020.03.04.");
    }

    #[test]
    fn long_ranges_are_allowed_reversed_are_not() {
        let store = RecordSet::default();
        let rows = ExportLogic::rows(&store, &d("2020.01.01."), &d("2020.12.31.")).unwrap();
        assert_eq!(rows.len(), 366);
        assert!(matches!(
            ExportLogic::rows(&store, &d("2020.03.02."), &d("2020.03.01.")),
            Err(AppError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn writes_json_with_break_key() {
        let p = std::env::temp_dir().join("timereport_export_unit.json");
        std::fs::remove_file(&p).ok();
        let n = ExportLogic::export(&RecordSet::default(), &d("2020.03.02."), &d("2020.03.03."), &p, false)
            .unwrap();
        assert_eq!(n, 2);
        let back: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&p).unwrap()).unwrap();
        assert_eq!(back[0]["break"], "00:00");
        assert_eq!(back[1]["date"], "2020.03.03.");
        std::fs::remove_file(&p).ok();
    }
}
