//! Unified error types for the chat loop.

use std::fmt;

// ---------------------------------------------------------------------------
// GenerationError
// ---------------------------------------------------------------------------

/// Errors from one generator invocation. Always recoverable per turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The generator process could not be started.
    Spawn(String),
    /// The generator exited with a non-zero status.
    Failed { exit_code: i32, stderr: String },
}

impl GenerationError {
    /// Diagnostic text shown to the user for a failed turn.
    pub fn detail(&self) -> &str {
        match self {
            Self::Spawn(msg) => msg,
            Self::Failed { stderr, .. } => stderr,
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "failed to start generator: {msg}"),
            Self::Failed { exit_code, stderr } => {
                write!(f, "generator exited with {exit_code}: {stderr}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

// ---------------------------------------------------------------------------
// ToneError
// ---------------------------------------------------------------------------

/// Rejected tone selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneError {
    Unknown(String),
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(tag) => write!(f, "unknown tone `{tag}`"),
        }
    }
}

impl std::error::Error for ToneError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ChatError — top-level
// ---------------------------------------------------------------------------

/// Errors that end a chat session abnormally.
#[derive(Debug)]
pub enum ChatError {
    /// Reading user input failed.
    Io(std::io::Error),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "input: {e}"),
        }
    }
}

impl std::error::Error for ChatError {}

impl From<std::io::Error> for ChatError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
