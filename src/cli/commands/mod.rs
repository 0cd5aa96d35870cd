pub mod backup;
pub mod config;
pub mod export;
pub mod info;
pub mod init;
pub mod list;
pub mod recent;
pub mod rename;
pub mod tasks;
pub mod timer;
pub mod totals;

use crate::config::Config;
use crate::store::SessionStore;
use crate::utils::path::expand_tilde;

/// Open the configured store. File access is per-operation; this is just
/// the resolved path.
pub(crate) fn open_store(cfg: &Config) -> SessionStore {
    SessionStore::new(expand_tilde(&cfg.store))
}
