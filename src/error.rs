//! Error types for environment inspection and editing.
//!
//! Validation failures ([`EnvError::InvalidAddress`], [`EnvError::InvalidPath`])
//! are always recovered locally: the specialized editors convert them into a
//! status message and keep the original value. [`EnvError::NotFound`] and
//! [`EnvError::NotAPathGroup`] abort a command with a message but are not
//! treated as process failures. Only I/O errors are fatal to a session.

use std::fmt;
use std::io;

use crate::classify::VarKind;

/// Errors raised by the snapshot, the editors, and the command surface.
#[derive(Debug)]
pub enum EnvError {
    /// A specialized address editor rejected the replacement value.
    InvalidAddress { kind: VarKind, input: String },

    /// A path or path-group element failed the path grammar check.
    InvalidPath { input: String },

    /// The named variable is not present in the snapshot.
    NotFound { name: String },

    /// A path-group command was invoked on a value of another kind.
    NotAPathGroup { name: String },

    /// The terminal is too small to lay out the minimum viewport.
    TerminalTooSmall,

    /// The system clipboard rejected the write.
    Clipboard(String),

    /// Keypress decoding, terminal control, or file I/O failed.
    Io(io::Error),
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvError::InvalidAddress { kind, input } => {
                write!(f, "'{}' is not a valid {} address", input, kind)
            }
            EnvError::InvalidPath { input } => {
                write!(f, "'{}' is not a valid path", input)
            }
            EnvError::NotFound { name } => {
                write!(f, "{} is not in the environment variables", name)
            }
            EnvError::NotAPathGroup { name } => {
                write!(f, "{} is not a path group", name)
            }
            EnvError::TerminalTooSmall => {
                write!(f, "terminal window is too small to render")
            }
            EnvError::Clipboard(reason) => {
                write!(f, "clipboard write failed: {}", reason)
            }
            EnvError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for EnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnvError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EnvError {
    fn from(e: io::Error) -> Self {
        EnvError::Io(e)
    }
}
