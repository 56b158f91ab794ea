use crate::cli::commands::{load_axis, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_overtime;
use crate::utils::date::parse_flexible_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let d = parse_flexible_date(date)?;
        let store = open_store(cfg)?;
        let axis = load_axis(cfg)?;

        let (stored, derived) = Core::day(&store, &axis, &d)?;

        header(format!("{} {}", d, d.format_with("%A")?));
        if derived.is_off_day() {
            info("No working time recorded for this day.");
            return Ok(());
        }

        let mut t = Table::new(&["Arrival", "Leaving", "Break", "Worked", "Overtime"]);
        t.add_row(vec![
            stored.from,
            stored.to,
            stored.break_time,
            derived.worked_label.clone(),
            colorize_overtime(derived.signed_overtime_minutes, &derived.overtime_label),
        ]);
        print!("{}", t.render());
    }
    Ok(())
}
