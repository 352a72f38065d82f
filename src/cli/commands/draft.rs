use crate::cli::parser::Commands;
use crate::core::draft::{PromptDrafter, SampleDrafter};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Draft a candidate prompt from a topic. The result is printed for the
/// teacher to edit; nothing is stored until they run `add`.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Draft { topic } = cmd {
        let draft = SampleDrafter.generate(topic)?;

        success(format!("Draft for topic '{}':", topic.trim()));
        println!();
        println!("{}", draft);
        println!();
        info("Edit it if needed, then store it with: promptbank add <kind> --code <CODE> --prompt '…'");
    }

    Ok(())
}
