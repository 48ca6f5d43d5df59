use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with --test)
///  - the storage file for the selected backend
///  - the schema and the default partner names
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cfg, cli.test)?;

    println!("⚙️  Initializing {}…", cfg.theme.app_title);
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Storage    : {} ({})", cfg.storage_path(), cfg.backend.as_str());

    let mut store = open_store(cfg)?;
    let names = store.partner_names()?;
    store.save_partner_names(&names)?;

    if let Err(e) = store.audit(
        "init",
        cfg.backend.as_str(),
        &format!("Storage initialized at {}", cfg.storage_path()),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("👫 Partners    : {} & {}", names.first(), names.second());
    println!("🎉 Initialization completed!");
    Ok(())
}
