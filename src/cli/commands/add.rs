use crate::cli::commands::{load_axis, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::normalizer::normalize;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::colorize_overtime;
use crate::utils::date::parse_flexible_date;

/// Add or replace the record of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        from,
        to,
        break_time,
    } = cmd
    {
        let d = parse_flexible_date(date)?;
        let mut store = open_store(cfg)?;

        let record = AddLogic::apply(&mut store, d, from, to, break_time.as_deref())?;
        let derived = normalize(&record, &load_axis(cfg)?)?;

        success(format!(
            "Saved {}: {} - {} (break {}), worked {}, overtime {}",
            record.date,
            record.arrival,
            record.leaving,
            record.break_time,
            derived.worked_label,
            colorize_overtime(derived.signed_overtime_minutes, &derived.overtime_label)
        ));
    }
    Ok(())
}
