use crate::cli::commands::{load_axis, open_store, range_of};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::aggregate;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Metrics { range, json } = cmd {
        let (start, end) = range_of(range)?;
        let store = open_store(cfg)?;
        let axis = load_axis(cfg)?;

        let report = aggregate(&store, &axis, &start, &end)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report.metrics)?);
            return Ok(());
        }

        header(format!("Metrics {} - {}", start, end));
        let mut t = Table::new(&["Metric", "Value"]);
        for (label, value) in report.metrics.display_rows() {
            t.add_row(vec![label.to_string(), value]);
        }
        print!("{}", t.render());

        for f in &report.flagged {
            warning(format!("{} ignored: {}", f.date, f.reason));
        }
    }
    Ok(())
}
