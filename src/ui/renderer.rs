//! Terminal output renderer for chat and status messages.
//!
//! Assistant lines and the prompt go to stdout; status, warnings, and errors
//! go to stderr so redirected stdout holds only the conversation.

use crate::ui::settings;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Prints chat lines with optional color.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print the user input prompt, preceded by a blank separator line.
    pub fn prompt(&self) {
        let mut out = io::stdout().lock();
        if self.color {
            let _ = write!(
                out,
                "\n{}",
                settings::PROMPT_USER
                    .with(settings::COLOR_PROMPT_USER)
                    .bold()
            );
        } else {
            let _ = write!(out, "\n{}", settings::PROMPT_USER);
        }
        // The prompt has no newline; flush so it shows before input is read.
        let _ = out.flush();
    }

    /// Print one assistant line to stdout.
    pub fn assistant_message(&self, content: &str) {
        self.assistant_line(content, settings::COLOR_ASSISTANT_TEXT);
    }

    /// Print an assistant line describing a failed turn.
    pub fn assistant_failure(&self, content: &str) {
        self.assistant_line(content, settings::COLOR_FAILURE_TEXT);
    }

    fn assistant_line(&self, content: &str, color: crossterm::style::Color) {
        if !self.color {
            println!("\n{content}");
            return;
        }
        match settings::split_assistant_label(content) {
            Some(rest) => println!(
                "\n{}{}",
                settings::LABEL_ASSISTANT
                    .with(settings::COLOR_ASSISTANT_LABEL)
                    .bold(),
                rest.with(color)
            ),
            None => println!("\n{}", content.with(color)),
        }
    }

    /// Print an activity line for lifecycle updates (to stderr).
    pub fn activity(&self, text: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                text.with(settings::COLOR_ACTIVITY_TEXT).bold()
            );
        } else {
            eprintln!("{text}");
        }
    }

    /// Print a small section header in status-style output.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print a key/value line under a section.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE)
            );
        } else {
            eprintln!("{}{key}: {value}", settings::INDENT_1);
        }
    }

    /// Print a warning line (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print an error line (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }
}
