//! Shared test fixtures for chat, transcript, and generator tests.
//!
//! Std-only helpers: a temp-dir fixture plus scripted stand-ins for the
//! input source, the generator, and the render sink.

use crate::chat::LineSource;
use crate::error::GenerationError;
use crate::generator::Generator;
use crate::ui::render::RenderSink;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "eidos-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Input source that replays fixed lines, then reports end of input.
pub struct ScriptedLines {
    lines: VecDeque<String>,
    stall_when_drained: bool,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            stall_when_drained: false,
        }
    }

    /// Once the lines run out, wait forever instead of reporting end of
    /// input, like a terminal nobody is typing into.
    pub fn then_stall(mut self) -> Self {
        self.stall_when_drained = true;
        self
    }
}

#[async_trait]
impl LineSource for ScriptedLines {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.pop_front() {
            Some(line) => Ok(Some(line)),
            None if self.stall_when_drained => std::future::pending().await,
            None => Ok(None),
        }
    }
}

/// Generator stand-in that records prompts and replays canned outcomes.
pub struct StubGenerator {
    outcomes: Mutex<VecDeque<Result<String, GenerationError>>>,
    fallback: Option<String>,
    hang_after: Option<usize>,
    calls: Mutex<Vec<String>>,
}

impl StubGenerator {
    /// Succeed with `payload` on every call.
    pub fn always_ok(payload: &str) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            fallback: Some(payload.to_string()),
            hang_after: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Return `outcomes` in order; calls past the end fail.
    pub fn scripted<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Result<String, GenerationError>>,
    {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            fallback: None,
            hang_after: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Never complete once `n` calls have finished.
    pub fn hang_after(mut self, n: usize) -> Self {
        self.hang_after = Some(n);
        self
    }

    /// Prompts received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn next_outcome(&self, prompt: &str) -> Option<Result<String, GenerationError>> {
        let mut calls = self.calls.lock().expect("calls lock");
        calls.push(prompt.to_string());
        if self.hang_after.is_some_and(|n| calls.len() > n) {
            return None;
        }
        let scripted = self.outcomes.lock().expect("outcomes lock").pop_front();
        Some(scripted.unwrap_or_else(|| match &self.fallback {
            Some(payload) => Ok(payload.clone()),
            None => Err(GenerationError::Failed {
                exit_code: 1,
                stderr: "no scripted outcome left".into(),
            }),
        }))
    }
}

#[async_trait]
impl Generator for StubGenerator {
    async fn invoke(&self, prompt: &str) -> Result<String, GenerationError> {
        match self.next_outcome(prompt) {
            Some(outcome) => outcome,
            None => std::future::pending().await,
        }
    }
}

/// One captured render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Prompt,
    Assistant(String),
    Failure(String),
    Activity(String),
    Section(String),
    Field(String, String),
    Warn(String),
    Error(String),
}

/// Render sink that records calls instead of writing to the terminal.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Rendered>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<Rendered> {
        self.events.lock().expect("events lock").clone()
    }

    pub fn assistant_lines(&self) -> Vec<String> {
        self.collect(|event| match event {
            Rendered::Assistant(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn failures(&self) -> Vec<String> {
        self.collect(|event| match event {
            Rendered::Failure(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.collect(|event| match event {
            Rendered::Warn(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|event| match event {
            Rendered::Error(text) => Some(text.clone()),
            _ => None,
        })
    }

    fn collect(&self, pick: impl Fn(&Rendered) -> Option<String>) -> Vec<String> {
        self.events().iter().filter_map(pick).collect()
    }

    fn push(&self, event: Rendered) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl RenderSink for RecordingSink {
    fn prompt(&self) {
        self.push(Rendered::Prompt);
    }

    fn assistant_message(&self, content: &str) {
        self.push(Rendered::Assistant(content.to_string()));
    }

    fn assistant_failure(&self, content: &str) {
        self.push(Rendered::Failure(content.to_string()));
    }

    fn activity(&self, text: &str) {
        self.push(Rendered::Activity(text.to_string()));
    }

    fn section(&self, title: &str) {
        self.push(Rendered::Section(title.to_string()));
    }

    fn field(&self, key: &str, value: &str) {
        self.push(Rendered::Field(key.to_string(), value.to_string()));
    }

    fn warn(&self, msg: &str) {
        self.push(Rendered::Warn(msg.to_string()));
    }

    fn error(&self, msg: &str) {
        self.push(Rendered::Error(msg.to_string()));
    }
}
