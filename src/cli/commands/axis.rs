use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::axis::AxisTable;
use crate::core::chart::{X_TICK_STEP, window_from_settings};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Axis { rebuild, print } = cmd {
        let path = cfg.axis_file_path();

        let axis = if *rebuild {
            let table = AxisTable::build();
            table.save(&path)?;
            success(format!("Axis cache rewritten: {}", path.display()));
            table
        } else {
            let table = AxisTable::load_or_build(&path)?;
            info(format!("Axis cache: {} ({} slots)", path.display(), table.len()));
            table
        };

        if *print {
            let window = window_from_settings(&axis, &cfg.graph.axis)?;
            println!("Window {} - {}", window.start_offset, window.stop_offset);
            for (label, offset) in axis.window(window.start_offset, window.stop_offset) {
                if offset % X_TICK_STEP == 0 {
                    println!("{:>5}  {}", offset, label);
                }
            }
        }
    }
    Ok(())
}
