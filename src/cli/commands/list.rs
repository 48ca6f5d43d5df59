use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::notifications::NotificationLogic;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::store::open_store;
use crate::ui::messages::{bell, header, info};
use crate::utils::colors::colorize_attended;
use crate::utils::date;
use crate::utils::formatting::{bold, mins2readable};

/// Dashboard: unread alerts on top, then urgent bookings and planned dates.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all } = cmd {
        let mut store = open_store(cfg)?;

        println!("{}", bold(&cfg.theme.app_title));

        let unread = NotificationLogic::unread(&store.list_notifications()?);
        if !unread.is_empty() {
            header("🔔 New Alerts");
            for n in &unread {
                bell(format!("#{} {}", n.id, n.message));
            }
            println!("(acknowledge with `rendezvous read <ID>`)");
        }

        let board = Dashboard::build(&store.list_events()?, date::now(), *all);

        header(&cfg.theme.urgent_heading);
        if board.urgent.is_empty() {
            info("No urgent bookings. Maybe it's time to make one?");
        }
        for ev in &board.urgent {
            print_urgent(ev);
        }

        header(&cfg.theme.planned_heading);
        if board.planned.is_empty() {
            info("No planned dates on the calendar.");
        }
        for ev in &board.planned {
            print_planned(ev);
        }
    }

    Ok(())
}

fn duration(ev: &Event) -> String {
    ev.end
        .map(|end| format!(" ({})", mins2readable((end - ev.start).num_minutes())))
        .unwrap_or_default()
}

fn print_urgent(ev: &Event) {
    let who = if ev.booker.is_empty() {
        "Someone"
    } else {
        ev.booker.as_str()
    };
    println!(
        "#{:<3} {} booked '{}' on {}{} {}",
        ev.id,
        bold(who),
        ev.title,
        date::pretty(&ev.start),
        duration(ev),
        colorize_attended(ev.attended)
    );
}

fn print_planned(ev: &Event) {
    let who = if ev.booker.is_empty() {
        "Unknown"
    } else {
        ev.booker.as_str()
    };
    let kind = ev
        .kind
        .as_deref()
        .map(|k| format!(" [{}]", k))
        .unwrap_or_default();
    println!(
        "#{:<3} {}{} on {}{} (booked by {}) {}",
        ev.id,
        bold(&ev.title),
        kind,
        date::pretty(&ev.start),
        duration(ev),
        who,
        colorize_attended(ev.attended)
    );
}
