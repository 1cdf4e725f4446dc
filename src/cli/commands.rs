// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// How many passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: u32,

        /// Skip recording the generated password in the history file
        #[arg(long)]
        no_history: bool,
    },

    /// Check the strength of a password
    Check {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },

    /// Show the password history
    History,

    /// Clear the password history
    ClearHistory,
}
