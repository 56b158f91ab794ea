use super::model::ReportRow;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Write the rows as a pretty-printed JSON array.
pub(crate) fn write_json(path: &Path, rows: &[ReportRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}
