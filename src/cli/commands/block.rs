use crate::cli::parser::{BlockAction, Commands};
use crate::config::Config;
use crate::core::blockouts::{BlockoutLogic, BlockoutSpan};
use crate::core::overlap::Interval;
use crate::errors::{AppError, AppResult};
use crate::store::open_store;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{self, DATE_FMT, format_timestamp, plus_minutes};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Block { action } = cmd else {
        return Ok(());
    };
    let mut store = open_store(cfg)?;

    match action {
        BlockAction::Add {
            title,
            date: date_arg,
            from,
            to,
            until,
            kind,
        } => {
            let day = date::require_date(date_arg)?;
            let span = match (from, to) {
                (Some(f), Some(t)) => BlockoutSpan::Timed {
                    date: day,
                    from: date::require_time(f)?,
                    to: date::require_time(t)?,
                },
                (None, None) => BlockoutSpan::AllDay {
                    first: day,
                    last: until
                        .as_deref()
                        .map(date::require_date)
                        .transpose()?
                        .unwrap_or(day),
                },
                _ => {
                    return Err(AppError::Validation(
                        "--from and --to must be given together.".to_string(),
                    ));
                }
            };

            let b = BlockoutLogic::add(store.as_mut(), cfg, title, &span, kind.as_deref())?;
            success(format!(
                "Blocked out '{}' (blockout #{}) from {} to {}",
                b.title,
                b.id,
                format_timestamp(&b.start),
                format_timestamp(&b.end)
            ));
        }

        BlockAction::List => {
            let blockouts = store.list_blockouts()?;
            if blockouts.is_empty() {
                info("No blocked-out time.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 3),
                Column::new("TITLE", 16),
                Column::new("FROM", 19),
                Column::new("TO", 19),
                Column::new("TYPE", 6),
            ]);
            for b in &blockouts {
                let (from, to) = if b.all_day {
                    // show the last blocked day, not the exclusive end
                    let last = (b.end - chrono::TimeDelta::days(1)).date();
                    (
                        b.start.date().format(DATE_FMT).to_string(),
                        last.format(DATE_FMT).to_string(),
                    )
                } else {
                    b.span()
                };
                table.add_row(vec![
                    b.id.to_string(),
                    b.title.clone(),
                    from,
                    to,
                    b.kind.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        BlockAction::Del { id } => {
            if BlockoutLogic::delete(store.as_mut(), *id)? {
                success(format!("Blockout #{} has been deleted.", id));
            } else {
                info(format!("No blockout with id {}, nothing to delete.", id));
            }
        }

        BlockAction::Check {
            date: date_arg,
            time,
            minutes,
        } => {
            let start = date::combine(date_arg, time)?;
            let end = plus_minutes(start, minutes.unwrap_or(cfg.default_event_minutes))?;
            let conflicts = BlockoutLogic::check(store.as_mut(), &Interval::new(start, end))?;

            match conflicts.first() {
                None => success(format!("{} is free.", date::pretty(&start))),
                Some(first) => {
                    warning(format!("Conflict with '{}'", first.title));
                    for b in &conflicts {
                        let (from, to) = b.span();
                        println!("  #{} {} ({} → {})", b.id, b.title, from, to);
                    }
                }
            }
        }
    }

    Ok(())
}
