//! Session transcript persisted as flat text at exit.
//!
//! Entries alternate between `You: <input>` and the formatted reply. The file
//! carries no header or schema: entries joined by `\n`, overwriting whatever
//! was there before.

use std::fs;
use std::io;
use std::path::Path;

/// Prefix applied to user lines in the transcript.
pub const USER_PREFIX: &str = "You: ";

/// Append-only log of one chat session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed exchange.
    pub fn record_exchange(&mut self, user_input: &str, reply: &str) {
        self.entries.push(format!("{USER_PREFIX}{user_input}"));
        self.entries.push(reply.to_string());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat-file rendering of the transcript.
    pub fn to_text(&self) -> String {
        self.entries.join("\n")
    }

    /// Write the transcript to `path`, replacing any previous contents.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_text())
    }
}
