use crate::models::day_record::StoredRecord;
use serde::{Deserialize, Serialize};

/// One exported day. Dates without a stored entry carry `00:00` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub date: String,
    pub arriving: String,
    pub leaving: String,
    #[serde(rename = "break")]
    pub break_time: String,
}

impl From<StoredRecord> for ReportRow {
    fn from(r: StoredRecord) -> Self {
        Self {
            date: r.date,
            arriving: r.from,
            leaving: r.to,
            break_time: r.break_time,
        }
    }
}
