//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! The single place to tweak prompt strings, labels, and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_USER: &str = "You: ";

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_ASSISTANT: &str = "Eidos:";
pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const INDENT_1: &str = "  ";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_PROMPT_USER: Color = Color::Cyan;
pub const COLOR_ASSISTANT_LABEL: Color = Color::Green;
pub const COLOR_ASSISTANT_TEXT: Color = Color::White;
pub const COLOR_FAILURE_TEXT: Color = Color::Red;
pub const COLOR_ACTIVITY_TEXT: Color = Color::DarkGrey;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::White;

/// Split a leading assistant label off `content` so it can be styled apart.
pub fn split_assistant_label(content: &str) -> Option<&str> {
    content.strip_prefix(LABEL_ASSISTANT)
}
