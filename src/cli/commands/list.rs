use crate::cli::commands::{load_axis, open_store, range_of};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::aggregate;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_off_day, colorize_overtime};
use crate::utils::table::Table;
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range } = cmd {
        let (start, end) = range_of(range)?;
        let store = open_store(cfg)?;
        let axis = load_axis(cfg)?;

        let report = aggregate(&store, &axis, &start, &end)?;

        header(format!("{} - {}", start, end));
        let mut t = Table::new(&[
            "Date", "Day", "Arrival", "Leaving", "Break", "Worked", "Overtime",
        ]);

        for day in &report.days {
            let weekday = day.date.format_with("%a")?;
            if day.is_off_day() {
                let dash = colorize_off_day("--:--");
                t.add_row(vec![
                    day.date.to_string(),
                    weekday,
                    dash.clone(),
                    dash.clone(),
                    dash.clone(),
                    dash.clone(),
                    dash,
                ]);
                continue;
            }
            t.add_row(vec![
                day.date.to_string(),
                weekday,
                day.from_label.clone(),
                day.to_label.clone(),
                format_minutes(day.break_minutes()),
                day.worked_label.clone(),
                colorize_overtime(day.signed_overtime_minutes, &day.overtime_label),
            ]);
        }
        print!("{}", t.render());

        for f in &report.flagged {
            warning(format!("{} ignored: {}", f.date, f.reason));
        }
    }
    Ok(())
}
