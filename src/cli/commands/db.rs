use crate::cli::parser::Commands;
use crate::config::{Backend, Config};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Open the SQLite database, refusing when another backend is configured.
pub fn sqlite_pool(cfg: &Config, operation: &'static str) -> AppResult<DbPool> {
    if cfg.backend != Backend::Sqlite {
        return Err(AppError::Unsupported {
            backend: cfg.backend.as_str(),
            operation,
        });
    }
    cfg.ensure_storage_reachable()?;
    Ok(DbPool::new(&cfg.database)?)
}

fn step(label: &str) {
    println!("{}▶ {}…{}", CYAN, label, RESET);
}

fn done(label: &str) {
    println!("{}✔ {}{}\n", GREEN, label, RESET);
}

/// Run one of SQLite's check pragmas; "ok" (or no rows) means healthy.
fn pragma_report(pool: &DbPool, pragma: &str) -> AppResult<Vec<String>> {
    let mut stmt = pool.conn.prepare(pragma)?;
    let rows = stmt.query_map([], |row| row.get::<_, rusqlite::types::Value>(0))?;

    let mut problems = Vec::new();
    for r in rows {
        match r? {
            rusqlite::types::Value::Text(t) if t == "ok" => {}
            other => problems.push(format!("{:?}", other)),
        }
    }
    Ok(problems)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = sqlite_pool(cfg, "db")?;

    if *migrate {
        step("Running migrations");
        init_db(&pool.conn)?;
        done("Migration completed.");
    }

    if *info {
        stats::print_db_info(&mut pool)?;
    }

    if *check {
        step("Running integrity check");
        let mut problems = pragma_report(&pool, "PRAGMA integrity_check;")?;
        problems.extend(pragma_report(&pool, "PRAGMA foreign_key_check;")?);

        if problems.is_empty() {
            done("Integrity check passed.");
        } else {
            println!("{}✘ Integrity check failed:{}", RED, RESET);
            for p in &problems {
                println!("    {}", p);
            }
            println!();
        }
    }

    if *vacuum {
        step("Running VACUUM");
        pool.conn.execute_batch("VACUUM;")?;
        done("Vacuum completed.");
    }

    Ok(())
}
