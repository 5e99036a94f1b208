use crate::cli::commands::record_op;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{EventStore, FileBackend};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the event CSV file with its header row, if missing
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = Config::config_file();

    println!("⚙️  Initializing devicelog…");

    //
    // 1️⃣ CONFIGURATION
    //
    if !cli.test {
        cfg.save_to(&path)?;
        info(format!("Config file : {}", path.display()));
    }

    //
    // 2️⃣ EVENT FILE
    //
    let data_path = cfg.data_file_path();
    let store = EventStore::new(FileBackend::new(&data_path));

    if store.ensure_initialized()? {
        success(format!("Event file created at {}", data_path.display()));
    } else {
        info(format!("Event file already present: {}", data_path.display()));
    }

    //
    // 3️⃣ INTERNAL LOG (non blocking)
    //
    record_op(
        cfg,
        "init",
        &data_path.to_string_lossy(),
        "Event file initialized",
    );

    success("devicelog initialization completed!");
    Ok(())
}
