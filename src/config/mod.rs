//! Configuration loading from an optional TOML file.
//!
//! The first file found wins:
//! 1. `./eidos.toml` in the current directory
//! 2. `$XDG_CONFIG_HOME/eidos/eidos.toml` (or `~/.config/eidos/eidos.toml`)
//! 3. Built-in defaults
//!
//! Every key is optional. An unknown `chat.tone` only produces a warning and
//! the default tone is used, matching how tone changes behave at runtime.

use crate::error::ConfigError;
use crate::personality::Tone;
use std::path::{Path, PathBuf};

mod defaults;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use types::{
    ChatConfig, Config, ConfigDiagnostics, DisplayConfig, GeneratorConfig, LoadedConfig,
};
use types::{FileChatConfig, FileConfig};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from the first available source.
pub fn load_config() -> Result<Config, ConfigError> {
    Ok(load_config_with_diagnostics()?.config)
}

/// Load configuration and keep the source path and warnings.
pub fn load_config_with_diagnostics() -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(|path| std::fs::read_to_string(path), config_root_dir)
}

fn load_config_from_sources<FRead, FRoot>(
    read_file: FRead,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(&read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&text)?;
    let mut diagnostics = ConfigDiagnostics::default();
    let config = resolve_file_config(parsed, &mut diagnostics)?;
    if let Some(path) = &source {
        tracing::debug!(path = %path.display(), "loaded config");
    }
    Ok(LoadedConfig {
        config,
        source,
        diagnostics,
    })
}

fn read_config_text<FRead, FRoot>(
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, Option<PathBuf>), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(root) = config_root() {
        candidates.push(root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }

    for path in candidates {
        match read_file(&path) {
            Ok(text) => return Ok((text, Some(path))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(ConfigError::Invalid(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        }
    }

    Ok((String::new(), None))
}

fn resolve_file_config(
    parsed: FileConfig,
    diagnostics: &mut ConfigDiagnostics,
) -> Result<Config, ConfigError> {
    validate_generator(&parsed.generator)?;
    let chat = resolve_chat(parsed.chat, diagnostics)?;
    Ok(Config {
        generator: parsed.generator,
        chat,
        display: parsed.display,
    })
}

fn validate_generator(generator: &GeneratorConfig) -> Result<(), ConfigError> {
    if generator.command.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "generator.command must not be empty".into(),
        ));
    }
    if generator.marker.is_empty() {
        return Err(ConfigError::Invalid(
            "generator.marker must not be empty".into(),
        ));
    }
    Ok(())
}

fn resolve_chat(
    chat: FileChatConfig,
    diagnostics: &mut ConfigDiagnostics,
) -> Result<ChatConfig, ConfigError> {
    let mut resolved = ChatConfig::default();

    if let Some(tag) = chat.tone {
        match tag.parse::<Tone>() {
            Ok(tone) => resolved.tone = tone,
            Err(err) => diagnostics.warnings.push(format!(
                "chat.tone: {err}; using `{}` (choose one of: {})",
                resolved.tone,
                tone_choices()
            )),
        }
    }

    if let Some(path) = chat.transcript_path {
        if path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "chat.transcript_path must not be empty".into(),
            ));
        }
        resolved.transcript_path = PathBuf::from(path);
    }

    Ok(resolved)
}

/// Comma-separated tone tags for help and warning text.
pub fn tone_choices() -> String {
    Tone::ALL
        .iter()
        .map(|tone| tone.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Root directory holding per-application config directories.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
