use crate::config::Config;
use crate::core::overlap::{Interval, all_conflicts};
use crate::errors::{AppError, AppResult};
use crate::models::blockout::{Blockout, DEFAULT_BLOCKOUT_KIND};
use crate::store::Store;
use crate::utils::date::{end_of_day, format_timestamp, start_of_day};
use chrono::{NaiveDate, NaiveTime};

/// What the blockout form describes.
#[derive(Debug, Clone)]
pub enum BlockoutSpan {
    /// One day, `from` until `to`.
    Timed {
        date: NaiveDate,
        from: NaiveTime,
        to: NaiveTime,
    },
    /// Whole days, `first..=last`.
    AllDay { first: NaiveDate, last: NaiveDate },
}

pub struct BlockoutLogic;

impl BlockoutLogic {
    pub fn prepare(
        cfg: &Config,
        title: &str,
        span: &BlockoutSpan,
        kind: Option<&str>,
    ) -> AppResult<Blockout> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation(
                "Please give the blockout a title.".to_string(),
            ));
        }

        let mut b = match *span {
            BlockoutSpan::Timed { date, from, to } => {
                if to <= from {
                    return Err(AppError::Validation(
                        "The blockout must end after it starts.".to_string(),
                    ));
                }
                Blockout::new(
                    title,
                    date.and_time(from),
                    date.and_time(to),
                    &cfg.theme.blockout_color,
                )
            }
            BlockoutSpan::AllDay { first, last } => {
                if last < first {
                    return Err(AppError::Validation(
                        "The last blocked day is before the first.".to_string(),
                    ));
                }
                let mut b = Blockout::new(
                    title,
                    start_of_day(first),
                    end_of_day(last),
                    &cfg.theme.blockout_color,
                );
                b.all_day = true;
                b
            }
        };

        b.kind = kind
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(DEFAULT_BLOCKOUT_KIND)
            .to_string();
        Ok(b)
    }

    pub fn add(
        store: &mut dyn Store,
        cfg: &Config,
        title: &str,
        span: &BlockoutSpan,
        kind: Option<&str>,
    ) -> AppResult<Blockout> {
        let b = Self::prepare(cfg, title, span, kind)?;
        let id = store.insert_blockout(&b)?;
        store.audit(
            "block",
            &format!("blockout #{}", id),
            &format!(
                "{} {} → {}",
                b.title,
                format_timestamp(&b.start),
                format_timestamp(&b.end)
            ),
        )?;
        Ok(Blockout { id, ..b })
    }

    /// Remove a blockout. Unknown ids are a no-op and return `false`.
    pub fn delete(store: &mut dyn Store, id: i64) -> AppResult<bool> {
        let removed = store.delete_blockout(id)?;
        if removed {
            store.audit("block_del", &format!("blockout #{}", id), "Blockout deleted")?;
        }
        Ok(removed)
    }

    /// Blockouts a candidate slot would collide with, reported one first.
    pub fn check(store: &mut dyn Store, candidate: &Interval) -> AppResult<Vec<Blockout>> {
        let blockouts = store.list_blockouts()?;
        Ok(all_conflicts(candidate, &blockouts)
            .into_iter()
            .cloned()
            .collect())
    }
}
