// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check password strength, generate passwords and keep a check history", long_about = None)]
pub struct Args {
    /// History file (CSV)
    #[arg(long, env = "HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Skip starting the web server
    #[arg(long)]
    pub no_api: bool,

    /// Web server port
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Run in API-only mode (no interactive menu)
    #[arg(long)]
    pub api_only: bool,
}
