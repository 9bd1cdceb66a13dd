//! Terminal-facing output.
//!
//! The chat loop depends on the [`render::RenderSink`] contract only; the
//! concrete [`renderer::Renderer`] writes styled text to stdout/stderr.

pub mod render;
pub mod renderer;
pub mod settings;
