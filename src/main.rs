//! CLI entry point for eidos.

mod cli;

use clap::Parser;
use eidos::chat::{ChatLoop, StdinLines};
use eidos::config::load_config_with_diagnostics;
use eidos::generator::CommandGenerator;
use eidos::personality::PersonalityEngine;
use eidos::ui::render::Renderer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _args = cli::Args::parse();
    init_tracing();
    // A pending stdin read would otherwise hold runtime shutdown open after
    // an interrupt, so exit explicitly.
    std::process::exit(run().await);
}

async fn run() -> i32 {
    let loaded = match load_config_with_diagnostics() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let config = loaded.config;
    let renderer = Renderer::new(config.display.color);
    for warning in &loaded.diagnostics.warnings {
        renderer.warn(warning);
    }
    tracing::debug!(
        generator = %config.generator.command,
        tone = %config.chat.tone,
        "starting session"
    );

    let mut chat = ChatLoop::new(
        CommandGenerator::from_config(&config.generator),
        PersonalityEngine::new(config.chat.tone),
        &config.chat.transcript_path,
        &renderer,
    );
    match chat.run(&mut StdinLines::new(), interrupt_signal()).await {
        Ok(end) => {
            tracing::debug!(reason = ?end.reason, "session ended");
            0
        }
        Err(e) => {
            renderer.error(&e.to_string());
            1
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for interrupt; Ctrl-C will not save history");
        std::future::pending::<()>().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
