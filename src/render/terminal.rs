//! ANSI text renderer for a [`DrawPlan`].
//!
//! One character column stands for `minutes_per_column` axis minutes. Each
//! lane takes a bar row and, when any annotation is visible, a label row
//! below it.

use crate::models::draw_plan::{ColorRole, DrawPlan, DrawPrimitive, Palette};
use ansi_term::{Colour, Style};
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_MINUTES_PER_COLUMN: u16 = 10;

pub struct TerminalRenderer {
    minutes_per_column: u16,
    use_color: bool,
}

/// Parse `#rrggbb` or a handful of common color names.
pub fn parse_color(color: &str) -> Option<Colour> {
    let s = color.trim();
    if let Some(hex) = s.strip_prefix('#')
        && hex.len() == 6
        && hex.is_ascii()
    {
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Colour::RGB(channel(0)?, channel(2)?, channel(4)?));
    }

    let named = match s.to_ascii_lowercase().as_str() {
        "black" => Colour::Black,
        "red" => Colour::Red,
        "green" => Colour::Green,
        "yellow" => Colour::Yellow,
        "blue" => Colour::Blue,
        "magenta" | "purple" => Colour::Purple,
        "cyan" | "aqua" => Colour::Cyan,
        "white" => Colour::White,
        "lightgreen" => Colour::RGB(144, 238, 144),
        "grey" | "gray" | "lightgray" | "lightgrey" => Colour::RGB(211, 211, 211),
        _ => return None,
    };
    Some(named)
}

fn glyph(role: ColorRole) -> char {
    match role {
        ColorRole::WorkingTime => '█',
        ColorRole::BreakTime => '▒',
        ColorRole::PlusTime | ColorRole::OvertimePlus => '+',
        ColorRole::MinusTime | ColorRole::OvertimeMinus => '-',
        ColorRole::Weekend => '·',
    }
}

fn pad_to(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES_PER_COLUMN, true)
    }
}

impl TerminalRenderer {
    pub fn new(minutes_per_column: u16, use_color: bool) -> Self {
        Self {
            minutes_per_column: minutes_per_column.max(1),
            use_color,
        }
    }

    fn columns(&self, plan: &DrawPlan) -> usize {
        (plan.window.width().max(0) as usize).div_ceil(self.minutes_per_column as usize)
    }

    /// Column span `[first, last)` of an axis interval, clipped to the window.
    fn span(&self, plan: &DrawPlan, start: i32, width: i32) -> Option<(usize, usize)> {
        let ncols = self.columns(plan) as i32;
        let mpc = self.minutes_per_column as i32;
        let rel = start - plan.window.start_offset as i32;

        let first = rel.div_euclid(mpc).max(0);
        let last = (rel + width + mpc - 1).div_euclid(mpc).min(ncols);
        (width > 0 && first < last).then_some((first as usize, last as usize))
    }

    fn column_of(&self, plan: &DrawPlan, x: i32) -> usize {
        let rel = (x - plan.window.start_offset as i32).max(0);
        (rel / self.minutes_per_column as i32) as usize
    }

    fn paint(&self, palette: &Palette, role: ColorRole, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match parse_color(palette.color(role)) {
            Some(c) => c.paint(text).to_string(),
            None => text.to_string(),
        }
    }

    fn paint_cells(&self, palette: &Palette, cells: &[Option<ColorRole>]) -> String {
        let mut out = String::new();
        let mut idx = 0;
        while idx < cells.len() {
            let role = cells[idx];
            let mut end = idx;
            while end < cells.len() && cells[end] == role {
                end += 1;
            }
            let run = end - idx;
            match role {
                Some(r) => {
                    let chunk: String = std::iter::repeat_n(glyph(r), run).collect();
                    out.push_str(&self.paint(palette, r, &chunk));
                }
                None => out.push_str(&" ".repeat(run)),
            }
            idx = end;
        }
        out
    }

    pub fn render(&self, plan: &DrawPlan) -> String {
        let ncols = self.columns(plan);
        let label_width = plan
            .lanes
            .iter()
            .map(|l| UnicodeWidthStr::width(l.label.as_str()))
            .chain(std::iter::once(UnicodeWidthStr::width(plan.y_label.as_str())))
            .max()
            .unwrap_or(0)
            + 1;

        let bold = if self.use_color {
            Style::new().bold()
        } else {
            Style::new()
        };

        let mut out = String::new();

        // tick header
        let mut header = vec![' '; ncols + 6];
        for tick in &plan.x_ticks {
            let col = self.column_of(plan, tick.position as i32);
            for (i, ch) in tick.label.chars().enumerate() {
                if let Some(slot) = header.get_mut(col + i) {
                    *slot = ch;
                }
            }
        }
        let header: String = header.into_iter().collect();
        out.push_str(&format!(
            "{}{}\n",
            bold.paint(pad_to(&plan.y_label, label_width)),
            header.trim_end()
        ));

        for lane in &plan.lanes {
            let mut cells: Vec<Option<ColorRole>> = vec![None; ncols];
            let mut labels: Vec<char> = vec![' '; ncols + 8];
            let mut has_labels = false;

            for p in &plan.primitives {
                match p {
                    DrawPrimitive::Band {
                        y,
                        start,
                        width,
                        role,
                        ..
                    }
                    | DrawPrimitive::Bar {
                        y,
                        start,
                        width,
                        role,
                        ..
                    } if *y == lane.y => {
                        if let Some((a, b)) = self.span(plan, *start, *width) {
                            cells[a..b].iter_mut().for_each(|c| *c = Some(*role));
                        }
                    }
                    DrawPrimitive::Text { x, y, text, .. } if (lane.y..lane.y + 3).contains(y) => {
                        has_labels = true;
                        let col = self.column_of(plan, *x);
                        for (i, ch) in text.chars().enumerate() {
                            if let Some(slot) = labels.get_mut(col + i) {
                                *slot = ch;
                            }
                        }
                    }
                    _ => {}
                }
            }

            out.push_str(&pad_to(&lane.label, label_width));
            out.push_str(&self.paint_cells(&plan.palette, &cells));
            out.push('\n');

            if has_labels {
                let line: String = labels.into_iter().collect();
                out.push_str(&" ".repeat(label_width));
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }

        out.push_str(&format!(
            "{}{}\n",
            " ".repeat(label_width),
            plan.x_label
        ));

        if let Some(panel) = &plan.overtime {
            let blocks = (panel.magnitude_seconds / 1800) as usize;
            let bar: String = std::iter::repeat_n(glyph(panel.role), blocks.max(1)).collect();
            let scale: Vec<&str> = panel.ticks.iter().map(|t| t.label.as_str()).collect();
            out.push('\n');
            out.push_str(&format!(
                "{} {} {}\n",
                bold.paint(pad_to(&panel.x_label, label_width)),
                self.paint(&plan.palette, panel.role, &panel.label),
                self.paint(&plan.palette, panel.role, &bar)
            ));
            out.push_str(&format!(
                "{}{}: {}\n",
                " ".repeat(label_width + 1),
                panel.y_label,
                scale.join("  ")
            ));
        }

        out
    }
}
