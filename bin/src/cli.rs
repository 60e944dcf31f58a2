use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface configuration
#[derive(Parser)]
#[command(name = "taskwin", author, version, about, long_about = None)]
pub struct Cli {
    /// Log file or directory override
    #[arg(long, env = "TASKWIN_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Move the caret to the next answer placeholder
    Next(NavArgs),
    /// Move the caret to the previous answer placeholder
    Prev(NavArgs),
}

#[derive(Args)]
pub struct NavArgs {
    /// Task file describing the placeholders (JSON)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Current caret byte offset
    #[arg(short, long)]
    pub caret: usize,
}
