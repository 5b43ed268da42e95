//! Clipboard backends for the CLI.
//!
//! The primary backend pipes text into a native clipboard program found on
//! PATH; the fallback emits an OSC 52 escape sequence, which most modern
//! terminals (including over SSH) turn into a clipboard write.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use debatecomps_core::clipboard::ClipboardWriter;
use debatecomps_core::error::{DirectoryError, DirectoryResult};

/// Clipboard programs in order of preference, with the arguments that make
/// them read the new clipboard contents from stdin.
const PROGRAMS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// A clipboard program that reads the text on stdin.
pub struct ProgramClipboard {
    name: &'static str,
    path: PathBuf,
    args: &'static [&'static str],
}

impl ProgramClipboard {
    /// The first supported clipboard program on PATH.
    pub fn discover() -> Option<Self> {
        PROGRAMS.iter().find_map(|&(name, args)| {
            which::which(name).ok().map(|path| ProgramClipboard {
                name,
                path,
                args,
            })
        })
    }
}

impl ClipboardWriter for ProgramClipboard {
    fn name(&self) -> &str {
        self.name
    }

    fn write_text(&self, text: &str) -> DirectoryResult<()> {
        let fail = |reason: String| DirectoryError::Clipboard {
            backend: self.name.to_string(),
            reason,
        };

        let mut child = Command::new(&self.path)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // Dropping stdin closes the pipe; reap the child before reporting a
        // failed write.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;

        if status.success() {
            Ok(())
        } else {
            Err(fail(format!("exited with {status}")))
        }
    }
}

/// Writes an OSC 52 "set clipboard" sequence to the controlling terminal.
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl ClipboardWriter for Osc52Clipboard {
    fn name(&self) -> &str {
        "osc52"
    }

    fn write_text(&self, text: &str) -> DirectoryResult<()> {
        let mut stderr = std::io::stderr();
        if !stderr.is_terminal() {
            return Err(DirectoryError::Clipboard {
                backend: self.name().to_string(),
                reason: "stderr is not a terminal".to_string(),
            });
        }

        stderr.write_all(Self::sequence(text).as_bytes())?;
        stderr.flush()?;
        Ok(())
    }
}

/// Every usable backend, primary first.
pub fn backends() -> Vec<Box<dyn ClipboardWriter>> {
    let mut backends: Vec<Box<dyn ClipboardWriter>> = Vec::new();
    if let Some(program) = ProgramClipboard::discover() {
        backends.push(Box::new(program));
    }
    backends.push(Box::new(Osc52Clipboard));
    backends
}

pub fn as_writers(backends: &[Box<dyn ClipboardWriter>]) -> Vec<&dyn ClipboardWriter> {
    backends.iter().map(|b| b.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_is_base64_payload() {
        assert_eq!(Osc52Clipboard::sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[cfg(unix)]
    #[test]
    fn test_program_that_ignores_stdin_reports_failed_write() {
        let Ok(path) = which::which("true") else {
            return;
        };
        let program = ProgramClipboard {
            name: "true",
            path,
            args: &[],
        };

        // Larger than any pipe buffer, so the write outlives the reader.
        let text = "x".repeat(4 * 1024 * 1024);
        assert!(program.write_text(&text).is_err());
    }

    #[test]
    fn test_osc52_is_always_the_last_backend() {
        let backends = backends();
        assert_eq!(backends.last().unwrap().name(), "osc52");
    }
}
