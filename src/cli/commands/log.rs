use crate::cli::commands::db::sqlite_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = sqlite_pool(cfg, "log")?;
        crate::db::initialize::init_db(&pool.conn)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
