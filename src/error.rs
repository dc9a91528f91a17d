//! Error types for pwforge.
//!
//! Each concern gets its own enum; `AppError` is what bubbles up to `main`.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerationError {
    #[error("password length must be at least {min}, got {length}")]
    InvalidLength { length: usize, min: usize },

    #[error("password length must be at most {max}, got {length}")]
    TooLong { length: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No backend could be reached at all.
    #[error("no clipboard mechanism available{}", hint_suffix(.hint))]
    Unavailable { hint: Option<&'static str> },

    /// A single backend is not installed or cannot be initialized.
    #[error("{backend} not found")]
    NotFound { backend: String },

    /// A backend was found but failed to take the text.
    #[error("{backend} failed: {message}")]
    Backend { backend: String, message: String },
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    hint.map(|h| format!(" ({h})")).unwrap_or_default()
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input interrupted")]
    Interrupted,

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn is_interrupt(&self) -> bool {
        matches!(self, AppError::Prompt(PromptError::Interrupted))
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Prompt(PromptError::Interrupted) => 0,
            AppError::Generation(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
