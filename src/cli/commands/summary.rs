use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DeviceLog, aggregate};
use crate::errors::AppResult;
use crate::models::OwnerCounts;
use crate::ui::messages::{header, info};
use crate::utils::colors::paint_balance;
use crate::utils::table::{Column, Table};
use std::collections::BTreeMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary = cmd {
        let log = DeviceLog::open_file(cfg.data_file_path())?;
        let counts = log.cumulative_view();

        if counts.is_empty() {
            info("No records to summarize yet.");
            return Ok(());
        }

        header("Cumulative check-out / check-in per owner");
        print!("{}", render_counts(&counts, &cfg.separator_char));

        let out = aggregate::owners_with_devices_out(&counts);
        if !out.is_empty() {
            println!("\nDevices still out: {}", out.join(", "));
        }
    }
    Ok(())
}

pub fn render_counts(counts: &BTreeMap<String, OwnerCounts>, separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::left("Owner"),
        Column::right("반출 횟수"),
        Column::right("반입 횟수"),
        Column::right("Balance"),
    ])
    .with_separator(separator);

    for (owner, c) in counts {
        table.add_row(vec![
            owner.clone(),
            c.checkout.to_string(),
            c.checkin.to_string(),
            paint_balance(c.balance()),
        ]);
    }

    table.render()
}
