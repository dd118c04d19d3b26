//! Error types for folder shells.

use thiserror::Error;

/// Errors that can end a folder shell run.
#[derive(Error, Debug)]
pub enum FolderError {
    /// The line terminal could not be acquired or failed while reading.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Writing to the terminal failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Prompt template does not carry exactly one path placeholder.
    #[error("invalid prompt template: {0}")]
    InvalidPrompt(String),

    /// The active folder's path no longer resolves from the run's root.
    #[error("folder '{0}' is no longer reachable")]
    Detached(String),

    /// A command handler failed.
    #[error("command '{name}' failed: {message}")]
    Command { name: String, message: String },
}

impl FolderError {
    /// Build a handler failure for the command `name`.
    pub fn command(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Command {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<rustyline::error::ReadlineError> for FolderError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Terminal(err.to_string())
    }
}

/// Result type alias for folder shell operations.
pub type Result<T> = std::result::Result<T, FolderError>;
