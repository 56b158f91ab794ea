//! JSON report export of a date range.

mod fs_utils;
mod json;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::ReportRow;

use crate::ui::messages::success;
use std::path::Path;

pub(crate) fn notify_export_success(rows: usize, path: &Path) {
    success(format!(
        "Report export completed: {} day(s) written to {}",
        rows,
        path.display()
    ));
}
