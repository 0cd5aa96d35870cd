use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty session store
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing tasktimer…");

    if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    success("tasktimer initialization completed!");
    Ok(())
}
