use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DeviceLog, aggregate};
use crate::errors::AppResult;
use crate::models::Event;
use crate::ui::messages::{header, info};
use crate::utils::colors::paint_action;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { owner, limit } = cmd {
        let log = DeviceLog::open_file(cfg.data_file_path())?;

        let mut events = log.all_events_view();
        if let Some(o) = owner {
            events = aggregate::events_for_owner(&events, o.trim());
        }

        if events.is_empty() {
            info("No records yet. Add the first one with `devicelog add <OWNER> out`.");
            return Ok(());
        }

        let max = limit.unwrap_or(cfg.list_limit);
        let shown = if max > 0 && max < events.len() {
            &events[..max]
        } else {
            &events[..]
        };

        header(format!("Device log ({} of {} records)", shown.len(), events.len()));
        print!("{}", render_events(shown, &cfg.separator_char));
    }
    Ok(())
}

/// Events as a table, in the order given.
pub fn render_events(events: &[Event], separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Owner"),
        Column::left("Action"),
        Column::left("Time"),
    ])
    .with_separator(separator);

    for (i, ev) in events.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            ev.owner_id.clone(),
            paint_action(ev.action, ev.action.to_store_token()),
            ev.timestamp_str(),
        ]);
    }

    table.render()
}
