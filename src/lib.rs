//! tasktimer library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Timer { .. } => cli::commands::timer::handle(&cli.command, cfg),
        Commands::Recent { .. } => cli::commands::recent::handle(&cli.command, cfg),
        Commands::Tasks { .. } => cli::commands::tasks::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Totals { .. } => cli::commands::totals::handle(&cli.command, cfg),
        Commands::Rename { .. } => cli::commands::rename::handle(&cli.command, cfg),
        Commands::Info => cli::commands::info::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load();

    // 3. apply store override from the command line, if any
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
