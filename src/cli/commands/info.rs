use super::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::stats::print_store_info;

/// Handle the `info` command: store diagnostics.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);
    print_store_info(&store)
}
