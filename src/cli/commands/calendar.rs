use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::calendar_entry::build_feed;
use crate::store::open_store;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { json } = cmd {
        let mut store = open_store(cfg)?;
        let feed = build_feed(&store.list_events()?, &store.list_blockouts()?);

        if *json {
            println!("{}", serde_json::to_string_pretty(&feed)?);
            return Ok(());
        }

        if feed.is_empty() {
            info("The calendar is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("START", 19),
            Column::new("END", 19),
            Column::new("TITLE", 20),
            Column::new("WHAT", 9),
        ]);

        for entry in &feed {
            let what = match (entry.display.as_deref(), entry.all_day) {
                (Some("background"), true) => "blocked (all day)",
                (Some("background"), false) => "blocked",
                _ => "date",
            };
            table.add_row(vec![
                entry.start.clone(),
                colorize_optional(entry.end.as_deref().unwrap_or("")),
                entry.title.clone(),
                what.to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
