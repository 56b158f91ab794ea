use crate::cli::commands::{load_axis, open_store, range_of};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::render::TerminalRenderer;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        range,
        json,
        scale,
        no_color,
    } = cmd
    {
        let (start, end) = range_of(range)?;
        let store = open_store(cfg)?;
        let axis = load_axis(cfg)?;

        let (report, plan) = Core::chart(&store, &axis, &cfg.graph, &start, &end)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            print!("{}", TerminalRenderer::new(*scale, !*no_color).render(&plan));
        }

        for f in &report.flagged {
            warning(format!("{} ignored: {}", f.date, f.reason));
        }
    }
    Ok(())
}
