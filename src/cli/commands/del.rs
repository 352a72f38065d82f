use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityKind;
use crate::store::CsvWorkbook;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Delete one stored prompt by password and activity code.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        kind,
        password,
        code,
        yes,
    } = cmd
    {
        let k = ActivityKind::from_code(kind).ok_or_else(|| AppError::UnknownKind(kind.clone()))?;

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete the {} prompt with activity code '{}'? This action is irreversible.",
                k.label(),
                code
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let mut wb = CsvWorkbook::open(cfg.workbook_path())?;

        match DeleteLogic::apply(&mut wb, k, password, code) {
            Ok(record) => {
                success(format!(
                    "Prompt with activity code '{}' has been deleted.",
                    record.activity_code
                ));
            }
            // a missing target is a warning, not a failure
            Err(AppError::RecordNotFound(c)) => {
                warning(format!(
                    "No stored prompt with activity code '{}' matches that password.",
                    c
                ));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
