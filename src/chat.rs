//! Interactive chat loop.
//!
//! One turn reads a line, hands it to the [`Generator`], formats the payload
//! with the active tone, and records the exchange. The session ends on
//! `exit`/`quit`, end of input, or the interrupt future resolving; every one
//! of those paths writes the transcript exactly once.

use crate::config::tone_choices;
use crate::error::{ChatError, GenerationError};
use crate::generator::Generator;
use crate::personality::PersonalityEngine;
use crate::transcript::Transcript;
use crate::ui::render::RenderSink;
use async_trait::async_trait;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

pub const GREETING: &str = "Eidos: Hi Plato! Let’s tackle this together. What’s on your mind?";
pub const FAREWELL: &str = "Eidos: Catch you later! Let me know if you need anything.";
pub const INTERRUPT_NOTICE: &str = "Eidos: Caught interrupt. Saving chat history and exiting...";
pub const FAILURE_PREFIX: &str = "Eidos: Oops, something went wrong. Error: ";

/// Keywords that end the session: the whole line, ASCII case-insensitive.
const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];
const TONE_COMMAND: &str = "/tone";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Source of user input lines.
#[async_trait]
pub trait LineSource: Send {
    /// Next line without its terminator, or `None` at end of input.
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Line reader over a buffered byte stream, stdin in production.
///
/// Lines are decoded lossily so a stray non-UTF-8 byte becomes U+FFFD
/// instead of ending the session.
pub struct InputLines<R> {
    reader: R,
    buf: Vec<u8>,
}

/// [`InputLines`] over the process stdin.
pub type StdinLines = InputLines<BufReader<Stdin>>;

impl<R> InputLines<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl StdinLines {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R> LineSource for InputLines<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        let mut line: &[u8] = &self.buf;
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}

/// What a raw input line asks the loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TurnInput<'a> {
    Exit,
    /// `/tone` with an optional tone tag.
    Tone(Option<&'a str>),
    Prompt(&'a str),
}

fn classify_input(line: &str) -> TurnInput<'_> {
    if EXIT_KEYWORDS
        .iter()
        .any(|keyword| line.eq_ignore_ascii_case(keyword))
    {
        return TurnInput::Exit;
    }
    if let Some(rest) = line.trim().strip_prefix(TONE_COMMAND) {
        if rest.is_empty() {
            return TurnInput::Tone(None);
        }
        if rest.starts_with(char::is_whitespace) {
            let arg = rest.trim();
            return TurnInput::Tone((!arg.is_empty()).then_some(arg));
        }
    }
    TurnInput::Prompt(line)
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed `exit` or `quit`.
    ExitCommand,
    /// Input was closed.
    EndOfInput,
    /// The interrupt future resolved.
    Interrupted,
}

/// Outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEnd {
    pub reason: ExitReason,
    /// Where the transcript was written, `None` if saving failed.
    pub saved_to: Option<PathBuf>,
}

/// Turn-taking driver for one chat session.
pub struct ChatLoop<'r, G> {
    generator: G,
    personality: PersonalityEngine,
    transcript: Transcript,
    transcript_path: PathBuf,
    renderer: &'r dyn RenderSink,
}

impl<'r, G: Generator> ChatLoop<'r, G> {
    pub fn new(
        generator: G,
        personality: PersonalityEngine,
        transcript_path: impl Into<PathBuf>,
        renderer: &'r dyn RenderSink,
    ) -> Self {
        Self {
            generator,
            personality,
            transcript: Transcript::new(),
            transcript_path: transcript_path.into(),
            renderer,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn personality(&self) -> &PersonalityEngine {
        &self.personality
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Run until exit, end of input, or `interrupt` resolves.
    ///
    /// The transcript is saved before this returns, including when reading
    /// input fails.
    pub async fn run<L, I>(&mut self, input: &mut L, interrupt: I) -> Result<SessionEnd, ChatError>
    where
        L: LineSource + ?Sized,
        I: Future<Output = ()>,
    {
        tokio::pin!(interrupt);
        self.renderer.assistant_message(GREETING);

        loop {
            self.renderer.prompt();
            let read = tokio::select! {
                _ = &mut interrupt => None,
                line = input.next_line() => Some(line),
            };
            let line = match read {
                None => return Ok(self.terminate(ExitReason::Interrupted)),
                Some(Ok(Some(line))) => line,
                Some(Ok(None)) => return Ok(self.terminate(ExitReason::EndOfInput)),
                Some(Err(err)) => {
                    tracing::error!(%err, "failed to read input");
                    self.persist();
                    return Err(err.into());
                }
            };

            match classify_input(&line) {
                TurnInput::Exit => return Ok(self.terminate(ExitReason::ExitCommand)),
                TurnInput::Tone(arg) => self.handle_tone(arg),
                TurnInput::Prompt(prompt) => {
                    let outcome = tokio::select! {
                        _ = &mut interrupt => None,
                        outcome = self.generator.invoke(prompt) => Some(outcome),
                    };
                    let Some(outcome) = outcome else {
                        return Ok(self.terminate(ExitReason::Interrupted));
                    };
                    self.finish_turn(prompt, outcome);
                }
            }
        }
    }

    fn finish_turn(&mut self, prompt: &str, outcome: Result<String, GenerationError>) {
        match outcome {
            Ok(payload) => {
                let reply = self.personality.generate_response(&payload);
                self.renderer.assistant_message(&reply);
                self.transcript.record_exchange(prompt, &reply);
                tracing::debug!(entries = self.transcript.len(), "turn recorded");
            }
            Err(err) => {
                tracing::warn!(%err, "generation failed");
                self.renderer
                    .assistant_failure(&format!("{FAILURE_PREFIX}{}", err.detail()));
            }
        }
    }

    fn handle_tone(&mut self, arg: Option<&str>) {
        let Some(tag) = arg else {
            self.renderer.section("tone");
            self.renderer.field("current", self.personality.tone().as_str());
            self.renderer.field("choices", &tone_choices());
            return;
        };
        if self.personality.set_tone(tag) {
            self.renderer.activity(&format!("Tone set to {tag}."));
        } else {
            self.renderer.warn(&format!(
                "Invalid tone. Keeping current tone: {}",
                self.personality.tone()
            ));
        }
    }

    fn terminate(&self, reason: ExitReason) -> SessionEnd {
        match reason {
            ExitReason::ExitCommand | ExitReason::EndOfInput => {
                self.renderer.assistant_message(FAREWELL)
            }
            ExitReason::Interrupted => self.renderer.assistant_message(INTERRUPT_NOTICE),
        }
        tracing::debug!(?reason, "session ending");
        SessionEnd {
            reason,
            saved_to: self.persist(),
        }
    }

    fn persist(&self) -> Option<PathBuf> {
        match self.transcript.save(&self.transcript_path) {
            Ok(()) => {
                self.renderer.assistant_message(&format!(
                    "Chat history saved to {}!",
                    self.transcript_path.display()
                ));
                Some(self.transcript_path.clone())
            }
            Err(err) => {
                tracing::error!(%err, path = %self.transcript_path.display(), "failed to save transcript");
                self.renderer
                    .error(&save_failure_message(&self.transcript_path, &err));
                None
            }
        }
    }
}

fn save_failure_message(path: &Path, err: &io::Error) -> String {
    format!("failed to save chat history to {}: {err}", path.display())
}
