//! rpayroll library root.
//! Exposes the CLI parser, the `run()` entry point, and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::output::Output;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, out: &Output) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli, out),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg, out),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg, out),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg, out),
        Commands::Employee { .. } => c::employee::handle(&cli.command, cfg, out),
        Commands::Company { .. } => c::company::handle(&cli.command, cfg, out),
        Commands::BusType { .. } => c::bus_type::handle(&cli.command, cfg, out),
        Commands::Work { .. } => c::work::handle(&cli.command, cfg, out),
        Commands::Salary { .. } => c::salary::handle(&cli.command, cfg, out),
        Commands::Summary { .. } => c::summary::handle(&cli.command, cfg, out),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg, out),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg, out),
    }
}

/// Load the configuration once, apply `--db`, and dispatch.
pub fn run(cli: &Cli) -> AppResult<()> {
    let out = Output::new(cli.json);

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(cli, &cfg, &out)
}
