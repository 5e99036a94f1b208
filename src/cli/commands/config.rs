use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
            println!("📄 Current configuration:\n");
            println!("{yaml}");
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&Config::config_file(), editor.as_deref());
        }
    }

    Ok(())
}

/// Platform default editor: $EDITOR, $VISUAL, then notepad / nano.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

fn edit(path: &Path, requested: Option<&str>) {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    if run_editor(&editor, path) {
        success(format!("Configuration file edited successfully using '{editor}'"));
        return;
    }

    warning(format!(
        "Editor '{editor}' not available, falling back to '{fallback}'"
    ));
    if run_editor(&fallback, path) {
        success(format!(
            "Configuration file edited successfully using fallback '{fallback}'"
        ));
    } else {
        error(format!(
            "Failed to edit configuration file using fallback '{fallback}'"
        ));
    }
}
