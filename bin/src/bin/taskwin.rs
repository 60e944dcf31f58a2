use clap::Parser;
use taskwin::NavigateDirection;
use taskwin_bin::{
    cli::{Cli, Command},
    commands,
};

fn main() {
    let cli = Cli::parse();

    let _log_guard = taskwin_log::init(taskwin_log::LogConfig {
        log_file_path: cli.log_file.clone(),
    })
    .unwrap_or_else(|e| {
        eprintln!("Error: failed to initialize logging: {e}");
        std::process::exit(1);
    });

    let result = match &cli.command {
        Command::Next(args) => commands::nav::handle(args, NavigateDirection::Next),
        Command::Prev(args) => commands::nav::handle(args, NavigateDirection::Previous),
    };

    if let Err(e) = result {
        eprintln!("Command failed: {e}");
        std::process::exit(1);
    }
}
