//! Rendezvous library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Backend, Config};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands as cmd;

    match &cli.command {
        Commands::Init => cmd::init::handle(cli, cfg),
        Commands::Config { .. } => cmd::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cmd::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cmd::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cmd::backup::handle(&cli.command, cfg),
        Commands::Names { .. } => cmd::names::handle(&cli.command, cfg),
        Commands::Book { .. } => cmd::book::handle(&cli.command, cfg),
        Commands::Edit { .. } | Commands::Attend { .. } => cmd::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cmd::del::handle(&cli.command, cfg),
        Commands::List { .. } => cmd::list::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cmd::calendar::handle(&cli.command, cfg),
        Commands::Block { .. } => cmd::block::handle(&cli.command, cfg),
        Commands::Note { .. } | Commands::Notes | Commands::Alert { .. } => {
            cmd::notes::handle(&cli.command, cfg)
        }
        Commands::Inbox { .. } | Commands::Read { .. } => cmd::inbox::handle(&cli.command, cfg),
        Commands::Mood { .. } => cmd::mood::handle(&cli.command, cfg),
        Commands::State { .. } => cmd::state::handle(&cli.command, cfg),
    }
}

/// Expand `~` in the configured paths and apply `--db` / `--blob` overrides.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    cfg.database = utils::path::resolve(&cfg.database);
    cfg.blob_file = utils::path::resolve(&cfg.blob_file);

    if let Some(custom_db) = &cli.db {
        cfg.backend = Backend::Sqlite;
        cfg.database = utils::path::resolve(custom_db);
    }
    if let Some(custom_blob) = &cli.blob {
        cfg.backend = Backend::Blob;
        cfg.blob_file = utils::path::resolve(custom_blob);
    }
}

fn init_logging(cfg: &Config) {
    let env = env_logger::Env::default().default_filter_or(cfg.log_level.as_str());
    // a second init (e.g. in tests) is harmless
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line storage overrides
    apply_overrides(&cli, &mut cfg);

    init_logging(&cfg);
    log::debug!("backend={} storage={}", cfg.backend.as_str(), cfg.storage_path());

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
