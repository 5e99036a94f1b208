use crate::cli::commands::record_op;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DeviceLog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::colors::paint_action;

/// Record a check-out or check-in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { owner, action } = cmd {
        let mut log = DeviceLog::open_file(cfg.data_file_path())?;

        let event = match log.submit_event(owner, *action) {
            Ok(ev) => ev,
            Err(e) => {
                if e.is_validation() {
                    warning("Please enter an owner id!");
                }
                return Err(e);
            }
        };

        success(format!(
            "{} {} recorded at {}",
            event.owner_id,
            paint_action(event.action, event.action.to_store_token()),
            event.timestamp_str()
        ));

        record_op(
            cfg,
            "add",
            &event.owner_id,
            &format!("{} {}", event.action.as_str(), event.timestamp_str()),
        );
    }

    Ok(())
}
