use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lookup::LookupLogic;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityKind;
use crate::store::CsvWorkbook;
use crate::ui::messages::{success, warning};

/// List every stored prompt matching a password.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        kind,
        password,
        json,
    } = cmd
    {
        let k = ActivityKind::from_code(kind).ok_or_else(|| AppError::UnknownKind(kind.clone()))?;

        let wb = CsvWorkbook::open(cfg.workbook_path())?;
        let records = LookupLogic::find_by_password(&wb, k, password)?;

        // an empty result is a normal outcome, not an error
        if records.is_empty() {
            warning(format!(
                "No stored prompts on the {} sheet match that password.",
                k.label()
            ));
            return Ok(());
        }

        if *json {
            let out = serde_json::to_string_pretty(&records)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        success(format!(
            "Found {} stored prompt(s) on the {} sheet.",
            records.len(),
            k.label()
        ));

        let payload_label = if k == ActivityKind::ImageGeneration {
            "Subject"
        } else {
            "Prompt"
        };

        for record in &records {
            println!();
            println!("  Code:    {}", record.activity_code);
            println!("  Saved:   {}", record.timestamp);
            println!("  {}: {}", payload_label, record.payload);
            if !record.email.is_empty() {
                println!("  Email:   {}", record.email);
            }
        }
    }

    Ok(())
}
