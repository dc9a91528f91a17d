//! Clipboard access.
//!
//! The OS clipboard is reached through one of several backends: the native
//! API via `arboard`, or an external helper program fed on stdin. The
//! `SystemClipboard` tries them in platform order and keeps the first that
//! works. Nothing in here knows about password generation.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::error::ClipboardError;

pub trait Clipboard {
    /// Human-readable backend name, used in user messages.
    fn name(&self) -> &str;

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Current clipboard text, if the backend can read it.
    fn contents(&mut self) -> Option<String> {
        None
    }
}

/// Native clipboard through `arboard`.
#[derive(Default)]
pub struct NativeClipboard;

impl NativeClipboard {
    fn open(&self) -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| {
            tracing::debug!("native clipboard init error: {}", e);
            ClipboardError::NotFound {
                backend: self.name().to_string(),
            }
        })
    }
}

impl Clipboard for NativeClipboard {
    fn name(&self) -> &str {
        "native clipboard"
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx = self.open()?;
        ctx.set_text(text.to_owned())
            .map_err(|e| ClipboardError::Backend {
                backend: self.name().to_string(),
                message: e.to_string(),
            })
    }

    fn contents(&mut self) -> Option<String> {
        self.open().ok()?.get_text().ok()
    }
}

/// An external program that reads the text to copy from stdin.
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn backend_error(&self, message: impl Into<String>) -> ClipboardError {
        ClipboardError::Backend {
            backend: self.program.clone(),
            message: message.into(),
        }
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ClipboardError::NotFound {
                    backend: self.program.clone(),
                });
            }
            Err(e) => return Err(self.backend_error(e.to_string())),
        };

        // Dropping stdin closes the pipe so the helper sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.trim().as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(self.backend_error(e.to_string()));
            }
        }

        let status = child
            .wait()
            .map_err(|e| self.backend_error(e.to_string()))?;
        if !status.success() {
            return Err(self.backend_error(format!("exited with {}", status)));
        }
        Ok(())
    }
}

/// Ordered chain of backends; the first successful copy wins.
pub struct SystemClipboard {
    backends: Vec<Box<dyn Clipboard>>,
    active: Option<usize>,
    hint: Option<&'static str>,
}

impl SystemClipboard {
    pub fn new(backends: Vec<Box<dyn Clipboard>>) -> Self {
        Self {
            backends,
            active: None,
            hint: None,
        }
    }

    /// Hint shown when nothing in the chain is installed.
    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Backends appropriate for the current OS.
    ///
    /// On Linux the helper programs come first: an X11 selection owned by
    /// this process would vanish as soon as it exits.
    pub fn for_platform() -> Self {
        let native: Box<dyn Clipboard> = Box::new(NativeClipboard);
        if cfg!(target_os = "windows") {
            Self::new(vec![native, Box::new(CommandClipboard::new("clip.exe", &[]))])
        } else if cfg!(target_os = "macos") {
            Self::new(vec![native, Box::new(CommandClipboard::new("pbcopy", &[]))])
        } else {
            Self::new(vec![
                Box::new(CommandClipboard::new("xclip", &["-selection", "clipboard"])),
                Box::new(CommandClipboard::new("xsel", &["-b"])),
                Box::new(CommandClipboard::new("wl-copy", &[])),
                native,
            ])
            .with_hint("install 'xclip' or 'xsel', e.g. sudo apt install xclip")
        }
    }
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        match self.active {
            Some(i) => self.backends[i].name(),
            None => "system clipboard",
        }
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_failure = None;

        for (i, backend) in self.backends.iter_mut().enumerate() {
            match backend.copy(text) {
                Ok(()) => {
                    tracing::debug!(backend = backend.name(), "copied to clipboard");
                    self.active = Some(i);
                    return Ok(());
                }
                Err(ClipboardError::NotFound { backend }) => {
                    tracing::debug!(%backend, "clipboard backend not available");
                }
                Err(e) => {
                    tracing::warn!("clipboard backend failed: {}", e);
                    last_failure = Some(e);
                }
            }
        }

        self.active = None;
        Err(last_failure.unwrap_or(ClipboardError::Unavailable { hint: self.hint }))
    }

    fn contents(&mut self) -> Option<String> {
        let i = self.active?;
        self.backends[i].contents()
    }
}

/// Wait `secs` seconds, then empty the clipboard if it still holds `text`.
///
/// Backends that cannot read the clipboard are cleared unconditionally.
/// Returns whether the clipboard was cleared.
pub fn clear_after(
    clipboard: &mut dyn Clipboard,
    text: &str,
    secs: u64,
) -> Result<bool, ClipboardError> {
    std::thread::sleep(Duration::from_secs(secs));

    match clipboard.contents() {
        Some(current) if current.trim() != text.trim() => {
            tracing::debug!("clipboard changed since copy; leaving it alone");
            Ok(false)
        }
        _ => {
            clipboard.copy("")?;
            Ok(true)
        }
    }
}
