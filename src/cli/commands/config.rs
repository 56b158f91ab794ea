use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            if path.exists() {
                ConfigLogic::print(&path)?;
            } else {
                warning("No configuration file yet, showing defaults.");
                ConfigLogic::print_effective(cfg)?;
            }
        }

        if *edit_config {
            if !path.exists() {
                cfg.save()?;
            }
            ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!("Configuration file edited: {}", path.display()));
        }

        if !*print_config && !*edit_config {
            warning("Nothing to do: use --print or --edit.");
        }
    }

    Ok(())
}
