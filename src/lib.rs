//! geotask library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind it: task storage, location tracking and proximity notifications.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod intelligence;
pub mod models;
pub mod tracking;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use intelligence::TaskIntelligence;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, intelligence: &TaskIntelligence) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg, intelligence),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Done { .. } => commands::done::handle(&cli.command, cfg),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Bookmark { .. } => commands::bookmark::handle(&cli.command, cfg),
        Commands::Nearby { .. } => commands::nearby::handle(&cli.command, cfg),
        Commands::Locate { .. } => commands::locate::handle(&cli.command, cfg),
        Commands::Watch { .. } => commands::watch::handle(&cli.command, cfg),
        Commands::Suggest { .. } => commands::suggest::handle(&cli.command, intelligence),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed down
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let intelligence = TaskIntelligence::new();

    dispatch(&cli, &cfg, &intelligence)
}
