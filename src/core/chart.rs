//! Chart coordinate emitter: turns derived days and range metrics into a
//! [`DrawPlan`] that any renderer can consume.

use crate::config::GraphSettings;
use crate::config::graph::AxisSettings;
use crate::core::axis::{AXIS_LEN, AxisTable};
use crate::errors::{AppError, AppResult};
use crate::models::derived_day::DerivedDayRecord;
use crate::models::draw_plan::{
    AnnotationField, AxisWindow, ColorRole, DrawPlan, DrawPrimitive, Lane, OvertimePanel, Tick,
};
use crate::models::metrics::RangeMetrics;
use crate::utils::time::{format_minutes, format_signed_minutes};
use std::collections::BTreeSet;
use tracing::debug;

pub const WINDOW_STEP: u16 = 50;
pub const X_TICK_STEP: u16 = 100;
pub const LANE_STRIDE: u32 = 3;
pub const LANE_HEIGHT: u32 = 2;
pub const FIRST_LANE_Y: u32 = 2;
/// Annotation shift left of a bar boundary.
pub const LABEL_SHIFT: i32 = 60;
/// Same, for the leaving label of a deficit day.
pub const DEFICIT_LABEL_SHIFT: i32 = 55;
pub const OVERTIME_TICK_SECONDS: i64 = 1800;
pub const OVERTIME_TICK_STEPS: i64 = 3;

/// Round `start` down and `stop` up to multiples of 50, within the axis.
pub fn quantize_window(start: u16, stop: u16) -> AxisWindow {
    let start = start.min(AXIS_LEN) / WINDOW_STEP * WINDOW_STEP;
    let stop = stop.div_ceil(WINDOW_STEP) * WINDOW_STEP;
    AxisWindow {
        start_offset: start,
        stop_offset: stop.min(AXIS_LEN),
    }
}

/// Quantized window for the configured `x_axis_start`/`x_axis_stop`.
pub fn window_from_settings(axis: &AxisTable, settings: &AxisSettings) -> AppResult<AxisWindow> {
    let start = axis.offset_of(&settings.x_axis_start)?;
    let stop = axis.offset_of(&settings.x_axis_stop)?;
    if stop <= start {
        return Err(AppError::Config(format!(
            "x_axis_stop {} must be later than x_axis_start {}",
            settings.x_axis_stop, settings.x_axis_start
        )));
    }
    Ok(quantize_window(start, stop))
}

pub struct ChartEmitter<'a> {
    axis: &'a AxisTable,
    settings: &'a GraphSettings,
}

impl<'a> ChartEmitter<'a> {
    pub fn new(axis: &'a AxisTable, settings: &'a GraphSettings) -> Self {
        Self { axis, settings }
    }

    pub fn emit(
        &self,
        days: &[DerivedDayRecord],
        metrics: &RangeMetrics,
        window: AxisWindow,
        visible_fields: &BTreeSet<AnnotationField>,
    ) -> AppResult<DrawPlan> {
        let window = quantize_window(window.start_offset, window.stop_offset);

        let mut lanes = Vec::with_capacity(days.len());
        let mut primitives = Vec::new();

        for (idx, day) in days.iter().enumerate() {
            let y = FIRST_LANE_Y + idx as u32 * LANE_STRIDE;
            lanes.push(Lane {
                date: day.date,
                y,
                label: self.lane_label(day)?,
            });

            if day.is_weekend {
                primitives.push(DrawPrimitive::Band {
                    y,
                    height: LANE_HEIGHT,
                    start: window.start_offset as i32,
                    width: window.width(),
                    role: ColorRole::Weekend,
                });
            }

            if day.is_off_day() {
                continue;
            }

            day_bars(day, y, &mut primitives);
            day_annotations(day, y, visible_fields, &mut primitives);
        }

        let overtime = self
            .settings
            .overtime
            .visible
            .then(|| self.overtime_panel(metrics.overtime_overall_minutes));

        debug!(
            lanes = lanes.len(),
            primitives = primitives.len(),
            start = window.start_offset,
            stop = window.stop_offset,
            "draw plan emitted"
        );

        Ok(DrawPlan {
            window,
            x_ticks: self.x_ticks(window),
            y_limit: (days.len() as u32 + 1) * LANE_STRIDE,
            lanes,
            x_label: self.settings.axis.x_axis_label.clone(),
            y_label: self.settings.axis.y_axis_label.clone(),
            primitives,
            overtime,
            palette: self.settings.palette(),
        })
    }

    fn lane_label(&self, day: &DerivedDayRecord) -> AppResult<String> {
        let mut label = day.date.format_with(&self.settings.date.format)?;
        if self.settings.date.day_name {
            label.push(' ');
            label.push_str(&day.date.format_with("%a")?);
        }
        Ok(label)
    }

    fn x_ticks(&self, window: AxisWindow) -> Vec<Tick> {
        (window.start_offset..=window.stop_offset)
            .filter(|p| p % X_TICK_STEP == 0)
            .filter_map(|p| {
                self.axis.label_of(p).map(|label| Tick {
                    position: p as i64,
                    label: label.to_string(),
                })
            })
            .collect()
    }

    fn overtime_panel(&self, overall_minutes: i64) -> OvertimePanel {
        let magnitude = overall_minutes.abs() * 60;

        let mut positions = vec![magnitude];
        for k in 1..=OVERTIME_TICK_STEPS {
            positions.push(magnitude + k * OVERTIME_TICK_SECONDS);
            let below = magnitude - k * OVERTIME_TICK_SECONDS;
            if below > 0 {
                positions.push(below);
            }
        }
        positions.sort_unstable();

        let ticks = positions
            .into_iter()
            .map(|s| {
                let minutes = s / 60;
                let label = if overall_minutes < 0 {
                    format_minutes(-minutes)
                } else {
                    format_minutes(minutes)
                };
                Tick { position: s, label }
            })
            .collect();

        OvertimePanel {
            overall_minutes,
            magnitude_seconds: magnitude,
            label: format_signed_minutes(overall_minutes),
            role: if overall_minutes < 0 {
                ColorRole::OvertimeMinus
            } else {
                ColorRole::OvertimePlus
            },
            ticks,
            x_label: self.settings.axis.overtime_x_axis_label.clone(),
            y_label: self.settings.axis.overtime_y_axis_label.clone(),
        }
    }
}

/// Working, break and overtime segments of a worked day.
fn day_bars(day: &DerivedDayRecord, y: u32, out: &mut Vec<DrawPrimitive>) {
    let from = day.from_offset as i32;
    let to = day.to_offset as i32;
    // a break longer than the stay eats the whole working segment
    let break_start = (to - day.break_offset as i32).max(from);

    let bar = |start: i32, width: i32, role: ColorRole| DrawPrimitive::Bar {
        y,
        height: LANE_HEIGHT,
        start,
        width,
        role,
    };

    if break_start > from {
        out.push(bar(from, break_start - from, ColorRole::WorkingTime));
    }
    if to > break_start {
        out.push(bar(break_start, to - break_start, ColorRole::BreakTime));
    }

    let ot = day.signed_overtime_minutes;
    if ot > 0 {
        out.push(bar(to, ot as i32, ColorRole::PlusTime));
    } else if ot < 0 {
        out.push(bar(to, ot.unsigned_abs() as i32, ColorRole::MinusTime));
    }
}

fn day_annotations(
    day: &DerivedDayRecord,
    y: u32,
    visible: &BTreeSet<AnnotationField>,
    out: &mut Vec<DrawPrimitive>,
) {
    let from = day.from_offset as i32;
    let to = day.to_offset as i32;
    let ot = day.signed_overtime_minutes;
    let text_y = y + LANE_HEIGHT / 2;

    let mut text = |field: AnnotationField, x: i32, label: &str| {
        if visible.contains(&field) {
            out.push(DrawPrimitive::Text {
                x,
                y: text_y,
                text: label.to_string(),
                field,
            });
        }
    };

    text(AnnotationField::Arriving, from, &day.from_label);
    text(AnnotationField::WorkingTime, from - LABEL_SHIFT, &day.worked_label);

    let (leaving_x, overtime_field) = if ot < 0 {
        (to - DEFICIT_LABEL_SHIFT, AnnotationField::MinusTime)
    } else {
        (to - LABEL_SHIFT, AnnotationField::PlusTime)
    };
    text(AnnotationField::Leaving, leaving_x, &day.to_label);
    text(overtime_field, to + ot.abs() as i32, &day.overtime_label);
}
