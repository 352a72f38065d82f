use crate::core::draft::SampleDrafter;
use crate::errors::AppResult;

/// Print the built-in sample prompt library.
pub fn handle() -> AppResult<()> {
    println!("📚 Built-in sample prompts (use with `add --sample <name>`):\n");

    for (name, text) in SampleDrafter::samples() {
        println!("  {:<22} {}", name, text);
    }

    Ok(())
}
