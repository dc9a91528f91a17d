//! Command dispatch layer for pwforge.
//!
//! This module wires the real terminal and OS clipboard into the command
//! implementations, which only see the `Prompter` and `Clipboard` seams.

use crate::cli::Cli;
use crate::clipboard::SystemClipboard;
use crate::error::Result;
use crate::ui::Prompter;

pub mod generate;

pub fn dispatch(cli: Cli) -> Result<()> {
    let opts = generate::GenerateOptions::from(&cli);
    tracing::debug!(?opts, "dispatching generate");

    let mut prompter = Prompter::stdio();
    let mut clipboard = SystemClipboard::for_platform();
    generate::run(&opts, &mut prompter, &mut clipboard)?;
    Ok(())
}
