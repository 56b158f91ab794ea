//! Declarative chart description handed to a renderer.
//!
//! Every coordinate is expressed in axis units: the x axis counts minutes
//! since midnight, the y axis counts lane units (three per day).

use super::calendar_date::CalendarDate;
use serde::Serialize;

/// What a colored element stands for; the palette maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    WorkingTime,
    BreakTime,
    PlusTime,
    MinusTime,
    Weekend,
    OvertimePlus,
    OvertimeMinus,
}

/// Annotation kinds that can be switched on and off in the graph settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationField {
    Arriving,
    Leaving,
    WorkingTime,
    PlusTime,
    MinusTime,
}

/// Visible slice of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisWindow {
    pub start_offset: u16,
    pub stop_offset: u16,
}

impl AxisWindow {
    pub fn width(&self) -> i32 {
        self.stop_offset as i32 - self.start_offset as i32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub position: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    /// Full-width background behind a lane.
    Band {
        y: u32,
        height: u32,
        start: i32,
        width: i32,
        role: ColorRole,
    },
    Bar {
        y: u32,
        height: u32,
        start: i32,
        width: i32,
        role: ColorRole,
    },
    Text {
        x: i32,
        y: u32,
        text: String,
        field: AnnotationField,
    },
}

/// One horizontal row of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lane {
    pub date: CalendarDate,
    pub y: u32,
    pub label: String,
}

/// The side chart showing the signed overtime balance of the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OvertimePanel {
    pub overall_minutes: i64,
    pub magnitude_seconds: i64,
    pub label: String,
    pub role: ColorRole,
    /// Tick positions in seconds, ascending.
    pub ticks: Vec<Tick>,
    pub x_label: String,
    pub y_label: String,
}

/// Concrete colors for every [`ColorRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub working_time: String,
    pub break_time: String,
    pub plus_time: String,
    pub minus_time: String,
    pub weekend: String,
    pub overtime_plus: String,
    pub overtime_minus: String,
}

impl Palette {
    pub fn color(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::WorkingTime => &self.working_time,
            ColorRole::BreakTime => &self.break_time,
            ColorRole::PlusTime => &self.plus_time,
            ColorRole::MinusTime => &self.minus_time,
            ColorRole::Weekend => &self.weekend,
            ColorRole::OvertimePlus => &self.overtime_plus,
            ColorRole::OvertimeMinus => &self.overtime_minus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawPlan {
    pub window: AxisWindow,
    pub x_ticks: Vec<Tick>,
    pub lanes: Vec<Lane>,
    pub y_limit: u32,
    pub x_label: String,
    pub y_label: String,
    /// Drawing order matters: bands come before the bars of their lane.
    pub primitives: Vec<DrawPrimitive>,
    pub overtime: Option<OvertimePanel>,
    pub palette: Palette,
}
