use clap::{Parser, Subcommand};

/// Command-line interface definition for promptbank
/// CLI application for storing classroom activity prompts in a CSV workbook
#[derive(Parser)]
#[command(
    name = "promptbank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Store, look up and delete classroom activity prompts from the command line",
    long_about = None
)]
pub struct Cli {
    /// Override workbook directory (useful for tests or a shared folder)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the workbook sheets
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// List the built-in sample prompts
    Samples,

    /// Draft a candidate prompt from a topic, to edit and store later
    Draft {
        /// Topic or keywords handed to the prompt drafter
        #[arg(long)]
        topic: String,
    },

    /// Validate and store a prompt under an activity code
    Add {
        /// Activity kind: vision, text or image
        kind: String,

        /// Activity code students will type in the student app
        #[arg(long, help = "Activity code students type to load the prompt")]
        code: String,

        /// Prompt text, written directly
        #[arg(long, help = "Prompt text, written directly")]
        prompt: Option<String>,

        /// Use a built-in sample prompt by name
        #[arg(long, help = "Name of a built-in sample prompt (see `samples`)")]
        sample: Option<String>,

        /// Draft the prompt from a topic instead of writing it
        #[arg(long, help = "Topic handed to the prompt drafter")]
        topic: Option<String>,

        /// Image subject (image kind only)
        #[arg(long, help = "Subject of the picture (image kind only)")]
        subject: Option<String>,

        /// Optional contact address to receive student results
        #[arg(long, help = "Optional contact email")]
        email: Option<String>,

        /// Optional password for later lookup and deletion
        #[arg(long, help = "Optional password for later lookup/deletion")]
        password: Option<String>,
    },

    /// List stored prompts matching a password
    List {
        /// Activity kind: vision, text or image
        kind: String,

        #[arg(long, help = "Password the prompts were stored with")]
        password: String,

        #[arg(long, help = "Print the matching records as JSON")]
        json: bool,
    },

    /// Delete one stored prompt by password and activity code
    Del {
        /// Activity kind: vision, text or image
        kind: String,

        #[arg(long, help = "Password the prompt was stored with")]
        password: String,

        #[arg(long, help = "Activity code of the prompt to delete")]
        code: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
