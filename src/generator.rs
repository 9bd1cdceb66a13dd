//! External text-generation boundary.
//!
//! The chat loop only sees the [`Generator`] trait. [`CommandGenerator`] is the
//! production implementation: one child process per prompt, invoked as
//! `<command> <subcommand> <prompt>` and awaited to completion. There is no
//! timeout, so a hung generator blocks the turn until it exits or the
//! session is interrupted.

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Produce the payload for `prompt`, or the failure text for this turn.
    async fn invoke(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Captured outcome of one generator process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Process exit code, `-1` when terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GenerationResult {
    /// Map the raw process outcome to a payload or a per-turn failure.
    pub fn into_payload(self, marker: &str) -> Result<String, GenerationError> {
        if self.exit_code != 0 {
            return Err(GenerationError::Failed {
                exit_code: self.exit_code,
                stderr: self.stderr.trim().to_string(),
            });
        }
        Ok(extract_payload(&self.stdout, marker).to_string())
    }
}

/// Text after the last `marker` in `stdout`, or all of it when the marker
/// never appears. Surrounding whitespace is trimmed either way.
pub fn extract_payload<'a>(stdout: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return stdout.trim();
    }
    match stdout.rsplit_once(marker) {
        Some((_, tail)) => tail.trim(),
        None => stdout.trim(),
    }
}

/// Runs an external executable per prompt.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    subcommand: String,
    marker: String,
}

impl CommandGenerator {
    pub fn new(
        program: impl Into<String>,
        subcommand: impl Into<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            subcommand: subcommand.into(),
            marker: marker.into(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.command, &config.subcommand, &config.marker)
    }

    /// Argument vector passed after the program name.
    fn args_for(&self, prompt: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(2);
        if !self.subcommand.is_empty() {
            args.push(self.subcommand.clone());
        }
        args.push(prompt.to_string());
        args
    }

    /// Spawn the generator for `prompt` and wait for it to exit.
    pub async fn run(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        run_process(&self.program, &self.args_for(prompt)).await
    }
}

#[async_trait]
impl Generator for CommandGenerator {
    async fn invoke(&self, prompt: &str) -> Result<String, GenerationError> {
        let result = self.run(prompt).await?;
        tracing::debug!(
            program = %self.program,
            exit_code = result.exit_code,
            stdout_bytes = result.stdout.len(),
            "generator finished"
        );
        result.into_payload(&self.marker)
    }
}

/// Spawn `program` with `args`, capturing both output streams.
async fn run_process(program: &str, args: &[String]) -> Result<GenerationResult, GenerationError> {
    let mut cmd = Command::new(program);
    // An interrupted turn drops this future; take the child down with it.
    cmd.kill_on_drop(true);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let child = cmd
        .spawn()
        .map_err(|e| GenerationError::Spawn(format!("{program}: {e}")))?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| GenerationError::Spawn(format!("{program}: {e}")))?;

    Ok(GenerationResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}
