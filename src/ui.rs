//! User interaction helpers for pwforge.
//!
//! This module centralizes terminal prompting. It is generic over the
//! reader and writer so the loops can be driven from tests. No generation
//! or clipboard logic should live here.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use crate::error::{GenerationError, PromptError};
use crate::generator::{self, MAX_LENGTH, MIN_LENGTH};

const GOODBYE: &str = "Exiting password generator. Goodbye!";

/// Print the farewell shown when input is interrupted.
pub fn say_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", GOODBYE)?;
    out.flush()
}

/// Make Ctrl-C end the program with the farewell and status 0.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let _ = say_goodbye(&mut io::stdout());
        std::process::exit(0);
    })
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for non-prompt output, so everything goes to one place.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one trimmed line.
    ///
    /// End of input is treated as an interrupt.
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(PromptError::Interrupted),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(e.into()),
        }
    }

    /// Ask for a password length until a valid one is entered.
    pub fn read_length(&mut self) -> Result<usize, PromptError> {
        let prompt = format!("Enter the desired password length (minimum {}): ", MIN_LENGTH);
        loop {
            let answer = self.ask(&prompt)?;

            // Parse signed so "-3" is reported as too short, not as garbage
            let length = match answer.parse::<i64>() {
                Ok(n) if n < 0 => 0,
                Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => 0,
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number for the length.")?;
                    continue;
                }
            };

            match generator::validate_length(length) {
                Ok(()) => return Ok(length),
                Err(GenerationError::InvalidLength { .. }) => {
                    tracing::debug!(length, "rejected short password length");
                    writeln!(
                        self.output,
                        "Password length must be at least {}. Please try again.",
                        MIN_LENGTH
                    )?;
                }
                Err(GenerationError::TooLong { .. }) => {
                    tracing::debug!(length, "rejected long password length");
                    writeln!(
                        self.output,
                        "Password length must be at most {}. Please try again.",
                        MAX_LENGTH
                    )?;
                }
            }
        }
    }

    /// Ask a yes/no question until it gets a recognizable answer.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let prompt = format!("{} (yes/no): ", question);
        loop {
            match self.ask(&prompt)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid choice. Please enter 'yes' or 'no'.")?,
            }
        }
    }
}
