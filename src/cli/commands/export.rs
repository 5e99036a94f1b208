use crate::cli::commands::record_op;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DeviceLog;
use crate::errors::AppResult;
use crate::export::{ExportKind, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        summary,
        force,
    } = cmd
    {
        let log = DeviceLog::open_file(cfg.data_file_path())?;
        let kind = if *summary {
            ExportKind::Summary
        } else {
            ExportKind::Events
        };

        if let Some(path) = ExportLogic::export(log.events(), *format, kind, file, *force)? {
            record_op(
                cfg,
                "export",
                &path.to_string_lossy(),
                &format!(
                    "{} export of {}",
                    format.as_str(),
                    if *summary { "summary" } else { "events" }
                ),
            );
        }
    }

    Ok(())
}
