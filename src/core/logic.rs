//! Request-level entry points shared by the CLI commands.

use crate::config::GraphSettings;
use crate::core::axis::AxisTable;
use crate::core::calculator::aggregate::{RangeReport, aggregate};
use crate::core::calculator::normalizer::normalize;
use crate::core::chart::{ChartEmitter, window_from_settings};
use crate::errors::AppResult;
use crate::models::calendar_date::CalendarDate;
use crate::models::day_record::StoredRecord;
use crate::models::derived_day::DerivedDayRecord;
use crate::models::draw_plan::DrawPlan;
use crate::store::RecordStore;

pub struct Core;

impl Core {
    /// Stored entry of one date and its derived view.
    pub fn day(
        store: &impl RecordStore,
        axis: &AxisTable,
        date: &CalendarDate,
    ) -> AppResult<(StoredRecord, DerivedDayRecord)> {
        let stored = store.get(date);
        let derived = normalize(&stored.parse()?, axis)?;
        Ok((stored, derived))
    }

    /// Aggregate the range and emit its draw plan with the configured window
    /// and annotations.
    pub fn chart(
        store: &impl RecordStore,
        axis: &AxisTable,
        settings: &GraphSettings,
        start: &CalendarDate,
        end: &CalendarDate,
    ) -> AppResult<(RangeReport, DrawPlan)> {
        let window = window_from_settings(axis, &settings.axis)?;
        let report = aggregate(store, axis, start, end)?;
        let plan = ChartEmitter::new(axis, settings).emit(
            &report.days,
            &report.metrics,
            window,
            &settings.time_elements.visible_fields(),
        )?;
        Ok((report, plan))
    }
}
