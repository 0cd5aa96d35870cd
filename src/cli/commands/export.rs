use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let store = open_store(cfg);
        ExportLogic::export(&store, format.clone(), file, period, *force)?;
    }
    Ok(())
}
