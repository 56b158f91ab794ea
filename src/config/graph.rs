//! Graph settings: colors, visible annotations, date labels, overtime panel
//! and axis window.

use crate::models::draw_plan::{AnnotationField, Palette};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub working_time: String,
    pub break_time: String,
    pub plus_time: String,
    pub minus_time: String,
    pub weekend: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            working_time: "#00ffff".to_string(),
            break_time: "#1e90ff".to_string(),
            plus_time: "#90ee90".to_string(),
            minus_time: "#ff0000".to_string(),
            weekend: "#d3d3d3".to_string(),
        }
    }
}

/// Which annotations are written next to the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeElements {
    pub arriving: bool,
    pub leaving: bool,
    pub working_time: bool,
    pub plus_time: bool,
    pub minus_time: bool,
}

impl Default for TimeElements {
    fn default() -> Self {
        Self {
            arriving: true,
            leaving: true,
            working_time: true,
            plus_time: true,
            minus_time: true,
        }
    }
}

impl TimeElements {
    pub fn visible_fields(&self) -> BTreeSet<AnnotationField> {
        [
            (self.arriving, AnnotationField::Arriving),
            (self.leaving, AnnotationField::Leaving),
            (self.working_time, AnnotationField::WorkingTime),
            (self.plus_time, AnnotationField::PlusTime),
            (self.minus_time, AnnotationField::MinusTime),
        ]
        .into_iter()
        .filter_map(|(on, field)| on.then_some(field))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateSettings {
    /// chrono pattern for lane labels.
    pub format: String,
    /// Append the abbreviated weekday name.
    pub day_name: bool,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            format: crate::models::calendar_date::DATE_FORMAT.to_string(),
            day_name: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeSettings {
    pub visible: bool,
    pub plus_time: String,
    pub minus_time: String,
}

impl Default for OvertimeSettings {
    fn default() -> Self {
        Self {
            visible: true,
            plus_time: "#008000".to_string(),
            minus_time: "#ff0000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    pub x_axis_start: String,
    pub x_axis_stop: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub overtime_x_axis_label: String,
    pub overtime_y_axis_label: String,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            x_axis_start: "05:00".to_string(),
            x_axis_stop: "20:00".to_string(),
            x_axis_label: "Times".to_string(),
            y_axis_label: "Dates".to_string(),
            overtime_x_axis_label: "Overtime".to_string(),
            overtime_y_axis_label: "Time".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    pub colors: ColorSettings,
    pub time_elements: TimeElements,
    pub date: DateSettings,
    pub overtime: OvertimeSettings,
    pub axis: AxisSettings,
}

impl GraphSettings {
    pub fn palette(&self) -> Palette {
        Palette {
            working_time: self.colors.working_time.clone(),
            break_time: self.colors.break_time.clone(),
            plus_time: self.colors.plus_time.clone(),
            minus_time: self.colors.minus_time.clone(),
            weekend: self.colors.weekend.clone(),
            overtime_plus: self.overtime.plus_time.clone(),
            overtime_minus: self.overtime.minus_time.clone(),
        }
    }
}
