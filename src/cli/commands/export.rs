use crate::cli::commands::{open_store, range_of};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { range, file, force } = cmd {
        let (start, end) = range_of(range)?;
        let store = open_store(cfg)?;
        ExportLogic::export(&store, &start, &end, &expand_tilde(file), *force)?;
    }
    Ok(())
}
