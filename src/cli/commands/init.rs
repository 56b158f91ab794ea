use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::axis::AxisTable;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory, the configuration file (skipped with
/// `--test`), an empty record store and the axis cache.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.records.clone(), cli.test)?;

    println!("⚙️  Initializing timereport…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Records    : {}", cfg.records_file);

    AxisTable::load_or_build(&cfg.axis_file_path())?;
    println!("📐 Axis cache  : {}", cfg.axis_file);

    success("timereport initialization completed!");
    Ok(())
}
