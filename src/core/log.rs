use crate::config::Config;
use crate::errors::AppResult;
use crate::store::oplog::{self, OpLogEntry};
use crate::utils::colors::colour_for_operation;
use crate::utils::table::{display_width, pad_right};

const MAX_OP_WIDTH: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = oplog::read_all(&cfg.oplog_file_path())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{line}");
        }

        Ok(())
    }

    /// One formatted line per entry: `N: date | operation (target) => message`.
    pub fn render(entries: &[OpLogEntry]) -> Vec<String> {
        let rows: Vec<(String, String, String, &str)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let op_target = truncate(&op_with_target(e), MAX_OP_WIDTH);
                ((i + 1).to_string(), date, op_target, e.operation.as_str())
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| display_width(&r.2))
            .max()
            .unwrap_or(10);

        rows.iter()
            .zip(entries)
            .map(|((id, date, op_target, op), entry)| {
                // only the operation word is coloured
                let coloured = match op_target.split_once(' ') {
                    Some((word, rest)) => {
                        format!("{} {}", colour_for_operation(op).paint(word), rest)
                    }
                    None => colour_for_operation(op).paint(op_target.as_str()).to_string(),
                };
                format!(
                    "{:>id_w$}: {:<date_w$} | {} => {}",
                    id,
                    date,
                    pad_right(&coloured, op_w),
                    entry.message,
                )
            })
            .collect()
    }
}

fn op_with_target(e: &OpLogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
