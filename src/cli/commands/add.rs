use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::draft::{PromptDrafter, SampleDrafter};
use crate::errors::{AppError, AppResult};
use crate::models::ActivityKind;
use crate::store::CsvWorkbook;
use crate::ui::messages::{info, success, warning};

/// Validate and store one prompt.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        code,
        prompt,
        sample,
        topic,
        subject,
        email,
        password,
    } = cmd
    {
        //
        // 1. Resolve the activity kind
        //
        let k = ActivityKind::from_code(kind).ok_or_else(|| AppError::UnknownKind(kind.clone()))?;

        //
        // 2. Resolve the payload from the chosen authoring mode.
        //    The image kind takes the subject string directly; the two
        //    prompt kinds accept direct text, a sample, or a drafted topic.
        //
        let payload = match k {
            ActivityKind::ImageGeneration => {
                if prompt.is_some() || sample.is_some() || topic.is_some() {
                    warning("Image prompts take --subject; other authoring flags are ignored.");
                }
                subject.clone().unwrap_or_default()
            }
            _ => {
                if subject.is_some() {
                    warning("--subject only applies to the image kind and is ignored here.");
                }
                if let Some(text) = prompt {
                    text.clone()
                } else if let Some(name) = sample {
                    SampleDrafter::sample(name)?.to_string()
                } else if let Some(t) = topic {
                    SampleDrafter.generate(t)?
                } else {
                    // empty payload; validation reports it as EmptyPrompt
                    String::new()
                }
            }
        };

        //
        // 3. Open the workbook and run the authoring workflow
        //
        let mut wb = CsvWorkbook::open(cfg.workbook_path())?;

        let record = AddLogic::apply(
            &mut wb,
            k,
            code.trim(),
            &payload,
            email.as_deref().unwrap_or("").trim(),
            password.as_deref().unwrap_or("").trim(),
        )?;

        success(format!(
            "Stored {} prompt under activity code '{}'.",
            k.label(),
            record.activity_code
        ));
        info("Students can now load it by typing that code in the student app.");
    }

    Ok(())
}
