use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

const OP_COLUMN_MAX: usize = 40;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "stop" => Colour::Red,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn visible_width(s: &str, ansi: &Regex) -> usize {
    ansi.replace_all(s, "").chars().count()
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    /// One printable line per entry; the operation word is colored and the
    /// `operation (target)` column is cut at a fixed width.
    pub fn format_entries(entries: &[LogEntry]) -> AppResult<Vec<String>> {
        let ansi =
            Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Other(e.to_string()))?;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        let mut lines = Vec::with_capacity(entries.len());

        for e in entries {
            let mut op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            if op_target.chars().count() > OP_COLUMN_MAX {
                op_target =
                    op_target.chars().take(OP_COLUMN_MAX - 3).collect::<String>() + "...";
            }

            let colored = match op_target.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                }
                None => color_for_operation(&e.operation)
                    .paint(op_target.as_str())
                    .to_string(),
            };
            let padding =
                " ".repeat(OP_COLUMN_MAX.saturating_sub(visible_width(&colored, &ansi)));

            lines.push(format!(
                "{:>id_w$}: {} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w
            ));
        }

        Ok(lines)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::format_entries(&entries)? {
            println!("{}", line);
        }
        Ok(())
    }
}
