//! pwforge: generate strong random passwords.
//!
//! The library exposes the pure generator (`generator`, `charset`) apart
//! from the terminal and clipboard glue used by the binary.

pub mod charset;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod error;
pub mod generator;
pub mod logger;
pub mod ui;

pub use charset::CharacterClass;
pub use error::{AppError, ClipboardError, GenerationError, PromptError};
pub use generator::{generate, generate_with, Password, MAX_LENGTH, MIN_LENGTH};
