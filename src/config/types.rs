//! Configuration data model.
//!
//! `File*` structs mirror the TOML shape; [`Config`] is the resolved form the
//! rest of the crate consumes. Loading and validation live in `config::mod`.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_GENERATOR_COMMAND, DEFAULT_GENERATOR_SUBCOMMAND, DEFAULT_PAYLOAD_MARKER,
    DEFAULT_TRANSCRIPT_PATH,
};
use crate::personality::Tone;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub chat: ChatConfig,
    pub display: DisplayConfig,
}

/// How the external generator is invoked.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Executable path or name looked up on `PATH`.
    pub command: String,
    /// Argument placed before the prompt. Empty means none.
    pub subcommand: String,
    /// Payload marker searched for in stdout.
    pub marker: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_GENERATOR_COMMAND.into(),
            subcommand: DEFAULT_GENERATOR_SUBCOMMAND.into(),
            marker: DEFAULT_PAYLOAD_MARKER.into(),
        }
    }
}

/// Resolved chat session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Tone active when the session starts.
    pub tone: Tone,
    /// Transcript destination, overwritten at session end.
    pub transcript_path: PathBuf,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            transcript_path: PathBuf::from(DEFAULT_TRANSCRIPT_PATH),
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Non-fatal notes gathered while loading config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

/// Config plus where it came from and what was wrong with it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
    pub diagnostics: ConfigDiagnostics,
}

/// Raw `eidos.toml` shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub generator: GeneratorConfig,
    pub chat: FileChatConfig,
    pub display: DisplayConfig,
}

/// Raw `[chat]` table; the tone stays a string until resolved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileChatConfig {
    pub tone: Option<String>,
    pub transcript_path: Option<String>,
}
