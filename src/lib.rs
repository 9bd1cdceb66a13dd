//! Eidos — a terminal chat loop over an external text generator.
//!
//! Each turn runs the generator executable once with the user's line, pulls
//! the generated payload out of its stdout, and wraps it in the active tone's
//! template. The session transcript is written to a flat text file on exit.
//!
//! # Quick start
//!
//! ```no_run
//! use eidos::chat::{ChatLoop, StdinLines};
//! use eidos::config::load_config;
//! use eidos::generator::CommandGenerator;
//! use eidos::personality::PersonalityEngine;
//! use eidos::ui::render::Renderer;
//!
//! # async fn example() {
//! let config = load_config().unwrap();
//! let renderer = Renderer::new(config.display.color);
//! let mut chat = ChatLoop::new(
//!     CommandGenerator::from_config(&config.generator),
//!     PersonalityEngine::new(config.chat.tone),
//!     &config.chat.transcript_path,
//!     &renderer,
//! );
//! let end = chat
//!     .run(&mut StdinLines::new(), std::future::pending())
//!     .await
//!     .unwrap();
//! println!("{:?}", end.reason);
//! # }
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod generator;
pub mod personality;
#[cfg(test)]
pub mod testsupport;
pub mod transcript;
pub mod ui;
