use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use crate::utils::table::visible_width;
use ansi_term::Colour;

/// ANSI colour for each logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "book" => Colour::Green,
        "del" | "block_del" => Colour::Red,
        "edit" | "attend" => Colour::Yellow,
        "note" | "read" => Colour::Purple,
        "alert" => Colour::RGB(255, 64, 64),
        "block" | "names" | "mood" => Colour::Cyan,
        "migration_applied" => Colour::Blue,
        "init" | "import" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const OP_WIDTH_MAX: usize = 40;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries: Vec<LogEntry> = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_target = |e: &LogEntry| {
            if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            }
        };

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(19);

        println!("📜 Internal log:\n");

        for e in &entries {
            let color = color_for_operation(&e.operation);
            let visible = truncate(&op_target(e), OP_WIDTH_MAX);

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&colored)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
