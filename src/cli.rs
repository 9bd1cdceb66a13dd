//! CLI argument parsing via clap.

use clap::Parser;

/// Chat with a local text generator from the terminal.
///
/// Type `exit` or `quit` to leave, `/tone <collaborative|curious|sharp>` to
/// change reply style. The transcript is saved on exit.
#[derive(Debug, Parser)]
#[command(name = "eidos", version)]
pub struct Args {}
