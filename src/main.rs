//! pwforge: an interactive random password generator.
//!
//! This file is the application entry point. It is intentionally kept small
//! and is responsible only for:
//!
//! - Parsing CLI arguments
//! - Initializing logging and the Ctrl-C handler
//! - Dispatching to the generate command
//! - Exiting with appropriate status codes
//!
//! The command lives in `commands/` and all prompting lives in `ui.rs`.

use clap::Parser;

use pwforge::{cli, commands, logger, ui};

fn main() {
    let cli = cli::Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = ui::install_interrupt_handler() {
        tracing::warn!("could not install Ctrl-C handler: {}", e);
    }

    if let Err(e) = commands::dispatch(cli) {
        if e.is_interrupt() {
            let _ = ui::say_goodbye(&mut std::io::stdout());
        } else {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}
