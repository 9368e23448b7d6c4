// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check the strength of a password and record it in history
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,
    },

    /// Generate a password
    Generate {
        /// Password length (8-32)
        #[arg(long, short, value_parser = clap::value_parser!(u16).range(8..=32))]
        length: Option<u16>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Show the check history, newest first
    History {
        /// Show passwords instead of masking them
        #[arg(long)]
        show_passwords: bool,
    },

    /// Delete the check history
    ClearHistory {
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}
