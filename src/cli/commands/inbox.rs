use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notifications::{Acknowledged, NotificationLogic};
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_notification};
use crate::utils::date;

/// Handle `inbox` and `read`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Inbox { all, recipient } => {
            let mut store = open_store(cfg)?;
            let stored = store.list_notifications()?;

            let mut list = if *all {
                NotificationLogic::newest_first(stored)
            } else {
                NotificationLogic::unread(&stored)
            };
            if let Some(r) = recipient {
                list = NotificationLogic::for_recipient(list, r);
            }

            if list.is_empty() {
                info("No new notifications.");
                return Ok(());
            }

            for n in &list {
                let when = n
                    .timestamp
                    .as_ref()
                    .map(date::pretty_short)
                    .unwrap_or_else(|| "--".to_string());
                let marker = if n.read { " " } else { "•" };
                println!(
                    "{}{} #{} [{}] {}{}  ({})",
                    color_for_notification(n.kind, n.read),
                    marker,
                    n.id,
                    n.kind,
                    n.message,
                    RESET,
                    when
                );
            }
        }

        Commands::Read { id, all, recipient } => {
            let mut store = open_store(cfg)?;

            if *all {
                let count =
                    NotificationLogic::acknowledge_all(store.as_mut(), recipient.as_deref())?;
                success(format!("{} notification(s) marked as read.", count));
                return Ok(());
            }

            if let Some(id) = id {
                match NotificationLogic::acknowledge(store.as_mut(), *id)? {
                    Acknowledged::Marked(kind) => success(format!(
                        "Notification #{} marked as read. See `{}`.",
                        id,
                        kind.follow_up()
                    )),
                    Acknowledged::AlreadyRead(_) => {
                        info(format!("Notification #{} was already read.", id))
                    }
                    Acknowledged::Unknown => {
                        info(format!("No notification with id {}, nothing to do.", id))
                    }
                }
            }
        }

        _ => {}
    }

    Ok(())
}
