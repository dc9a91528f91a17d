//! Generate a password and optionally copy it to the clipboard.

use std::io::{BufRead, Write};

use crate::cli::{Cli, CopyMode};
use crate::clipboard::{clear_after, Clipboard};
use crate::error::Result;
use crate::generator::{self, Password};
use crate::ui::Prompter;

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Fixed length; prompt for one when `None`
    pub length: Option<usize>,
    pub copy: CopyMode,
    pub clear_after: Option<u64>,
}

impl From<&Cli> for GenerateOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            length: cli.length,
            copy: cli.copy_mode(),
            clear_after: cli.clear_after,
        }
    }
}

pub fn run<R: BufRead, W: Write>(
    opts: &GenerateOptions,
    prompter: &mut Prompter<R, W>,
    clipboard: &mut dyn Clipboard,
) -> Result<Password> {
    writeln!(prompter.out(), "--- Secure Password Generator ---")?;

    let length = match opts.length {
        Some(length) => length,
        None => prompter.read_length()?,
    };
    let pwd = generator::generate(length)?;

    writeln!(prompter.out(), "\nYour generated password: {}", pwd)?;

    let wants_copy = match opts.copy {
        CopyMode::Always => true,
        CopyMode::Never => false,
        CopyMode::Ask => prompter.confirm("Do you want to copy the password to clipboard?")?,
    };

    if wants_copy {
        copy(&pwd, opts.clear_after, prompter.out(), clipboard)?;
    } else {
        writeln!(prompter.out(), "Password not copied.")?;
    }

    let out = prompter.out();
    writeln!(out, "\nThank you for using the Secure Password Generator!")?;
    writeln!(out, "Stay secure!")?;
    out.flush()?;

    Ok(pwd)
}

fn copy<W: Write>(
    pwd: &Password,
    clear_secs: Option<u64>,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    if let Err(e) = clipboard.copy(pwd.as_str()) {
        tracing::warn!("clipboard copy failed: {}", e);
        writeln!(out, "Could not copy to clipboard: {}", e)?;
        writeln!(out, "Failed to copy password automatically. Please copy it manually:")?;
        writeln!(out, "{}", pwd)?;
        return Ok(());
    }

    writeln!(out, "Password copied to clipboard (via {}).", clipboard.name())?;

    if let Some(secs) = clear_secs {
        writeln!(out, "Clipboard will be cleared in {} seconds.", secs)?;
        out.flush()?;

        match clear_after(clipboard, pwd.as_str(), secs) {
            Ok(true) => writeln!(out, "Clipboard cleared.")?,
            Ok(false) => writeln!(out, "Clipboard contents changed; left untouched.")?,
            Err(e) => {
                tracing::warn!("clipboard clear failed: {}", e);
                writeln!(out, "Could not clear clipboard: {}", e)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::tests::{FakeClipboard, Outcome};
    use crate::clipboard::SystemClipboard;
    use crate::error::{AppError, GenerationError};
    use std::io::Cursor;

    fn opts(length: Option<usize>, copy: CopyMode) -> GenerateOptions {
        GenerateOptions {
            length,
            copy,
            clear_after: None,
        }
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn text(p: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(p.out()).into_owned()
    }

    #[test]
    fn interactive_copy() {
        let mut fake = FakeClipboard::new("fake", Outcome::Works);
        let copied = fake.copied.clone();
        let mut p = prompter("x\n10\nyes\n");

        let pwd = run(&opts(None, CopyMode::Ask), &mut p, &mut fake).unwrap();

        assert_eq!(pwd.len(), 10);
        assert_eq!(*copied.borrow(), vec![pwd.to_string()]);
        let out = text(&mut p);
        assert!(out.contains(&format!("Your generated password: {}", pwd)));
        assert!(out.contains("Password copied to clipboard (via fake)."));
        assert!(out.ends_with("Stay secure!\n"));
    }

    #[test]
    fn declined_copy() {
        let mut fake = FakeClipboard::new("fake", Outcome::Works);
        let copied = fake.copied.clone();
        let mut p = prompter("no\n");

        run(&opts(Some(8), CopyMode::Ask), &mut p, &mut fake).unwrap();

        assert!(copied.borrow().is_empty());
        assert!(text(&mut p).contains("Password not copied."));
    }

    #[test]
    fn failed_copy_shows_password_again() {
        let mut chain = SystemClipboard::new(vec![Box::new(FakeClipboard::new(
            "xclip",
            Outcome::Missing,
        ))])
        .with_hint("install 'xclip'");
        let mut p = prompter("");

        let pwd = run(&opts(Some(16), CopyMode::Always), &mut p, &mut chain).unwrap();

        let out = text(&mut p);
        assert!(out.contains("no clipboard mechanism available (install 'xclip')"));
        assert!(out.contains("Please copy it manually:"));
        assert_eq!(out.matches(pwd.as_str()).count(), 2);
    }

    #[test]
    fn no_copy_never_asks() {
        let mut fake = FakeClipboard::new("fake", Outcome::Works);
        let mut p = prompter("");

        run(&opts(Some(6), CopyMode::Never), &mut p, &mut fake).unwrap();

        assert!(!text(&mut p).contains("(yes/no)"));
    }

    #[test]
    fn clears_after_copy() {
        let mut fake = FakeClipboard::new("fake", Outcome::Works);
        let copied = fake.copied.clone();
        let mut p = prompter("");
        let options = GenerateOptions {
            length: Some(12),
            copy: CopyMode::Always,
            clear_after: Some(0),
        };

        run(&options, &mut p, &mut fake).unwrap();

        assert_eq!(copied.borrow().last().map(String::as_str), Some(""));
        assert!(text(&mut p).contains("Clipboard cleared."));
    }

    #[test]
    fn invalid_fixed_length() {
        let mut fake = FakeClipboard::new("fake", Outcome::Works);
        let mut p = prompter("");

        let err = run(&opts(Some(3), CopyMode::Never), &mut p, &mut fake).unwrap_err();

        assert!(matches!(
            err,
            AppError::Generation(GenerationError::InvalidLength { length: 3, min: 4 })
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn oversized_fixed_length() {
        let mut fake = FakeClipboard::new("fake", Outcome::Works);
        let mut p = prompter("");

        let err = run(&opts(Some(usize::MAX), CopyMode::Never), &mut p, &mut fake).unwrap_err();

        assert!(matches!(
            err,
            AppError::Generation(GenerationError::TooLong { max: 4096, .. })
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn interrupt_at_prompt() {
        let mut fake = FakeClipboard::new("fake", Outcome::Works);
        let mut p = prompter("");

        let err = run(&opts(None, CopyMode::Ask), &mut p, &mut fake).unwrap_err();
        assert!(err.is_interrupt());
    }
}
