//! Default configuration constants.
//!
//! Callers share these constants instead of duplicating literals.

/// Generator executable, resolved relative to the working directory.
pub(super) const DEFAULT_GENERATOR_COMMAND: &str = "./thresh";
/// Subcommand placed before the prompt argument.
pub(super) const DEFAULT_GENERATOR_SUBCOMMAND: &str = "generate";
/// Marker preceding the generated payload in generator stdout.
pub(super) const DEFAULT_PAYLOAD_MARKER: &str = "Generated: ";
/// Transcript file written at session end.
pub(super) const DEFAULT_TRANSCRIPT_PATH: &str = "chat_history.txt";
/// Local config file name, also used under the global config root.
pub(super) const CONFIG_FILE_NAME: &str = "eidos.toml";
/// Directory under the global config root holding [`CONFIG_FILE_NAME`].
pub(super) const CONFIG_DIR_NAME: &str = "eidos";
