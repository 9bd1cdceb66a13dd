//! Rendering contract consumed by the chat loop.
//!
//! `Renderer` is the default terminal implementation; tests substitute a
//! recording sink without touching stdout/stderr.

pub use super::renderer::Renderer;

/// Injectable rendering interface used by orchestration code.
pub trait RenderSink: Send + Sync {
    /// Render the input prompt.
    fn prompt(&self);
    /// Render one assistant line (greeting, reply, farewell).
    fn assistant_message(&self, content: &str);
    /// Render an assistant line reporting a failed turn.
    fn assistant_failure(&self, content: &str);
    /// Render activity/lifecycle text.
    fn activity(&self, text: &str);
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

impl RenderSink for Renderer {
    fn prompt(&self) {
        self.prompt();
    }

    fn assistant_message(&self, content: &str) {
        self.assistant_message(content);
    }

    fn assistant_failure(&self, content: &str) {
        self.assistant_failure(content);
    }

    fn activity(&self, text: &str) {
        self.activity(text);
    }

    fn section(&self, title: &str) {
        self.section(title);
    }

    fn field(&self, key: &str, value: &str) {
        self.field(key, value);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }
}
