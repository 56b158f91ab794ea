pub mod add;
pub mod axis;
pub mod chart;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod metrics;
pub mod show;
pub mod user;

use crate::cli::parser::RangeArgs;
use crate::config::Config;
use crate::core::axis::AxisTable;
use crate::errors::AppResult;
use crate::models::calendar_date::CalendarDate;
use crate::store::JsonStore;
use crate::utils::date::resolve_range;

pub(crate) fn open_store(cfg: &Config) -> AppResult<JsonStore> {
    JsonStore::open(cfg.records_file_path())
}

pub(crate) fn load_axis(cfg: &Config) -> AppResult<AxisTable> {
    AxisTable::load_or_build(&cfg.axis_file_path())
}

pub(crate) fn range_of(args: &RangeArgs) -> AppResult<(CalendarDate, CalendarDate)> {
    resolve_range(
        args.from.as_deref(),
        args.to.as_deref(),
        args.period.as_deref(),
    )
}
