//! Command-line interface definitions for pwforge.
//!
//! This module defines the public CLI surface using `clap`. It contains no
//! application logic and exists solely to describe how users interact with
//! the program from the terminal.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pwforge",
    version,
    about = "Generate a strong random password",
    long_about = r#"
pwforge generates a random password containing at least one lowercase
letter, one uppercase letter, one digit and one punctuation character,
then optionally copies it to the system clipboard.

Without --length the program asks for the length interactively.

Typical usage:
  pwforge
  pwforge --length 24 --copy
  pwforge -l 16 --no-copy --clear-after 30
"#
)]
pub struct Cli {
    /// Password length (minimum 4); prompts when omitted
    #[arg(short, long, env = "PWFORGE_LENGTH")]
    pub length: Option<usize>,

    /// Copy the password to the clipboard without asking
    #[arg(short, long, conflicts_with = "no_copy")]
    pub copy: bool,

    /// Never copy the password and do not ask
    #[arg(long)]
    pub no_copy: bool,

    /// Clear the clipboard this many seconds after copying
    #[arg(long, value_name = "SECS", env = "PWFORGE_CLEAR_AFTER")]
    pub clear_after: Option<u64>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What to do about the clipboard once a password exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMode {
    Ask,
    Always,
    Never,
}

impl Cli {
    pub fn copy_mode(&self) -> CopyMode {
        match (self.copy, self.no_copy) {
            (true, _) => CopyMode::Always,
            (_, true) => CopyMode::Never,
            _ => CopyMode::Ask,
        }
    }
}
