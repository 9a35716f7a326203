//! Terminal rendering module.
//!
//! A small framebuffer-based pipeline (no widget library): routines draw
//! attributed cells into a [`FrameBuffer`] through [`TermCanvas`], and
//! [`TerminalRenderer`] flushes changed runs to the real terminal.

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use canvas::TermCanvas;
pub use fb::{Cell, FrameBuffer};
pub use renderer::TerminalRenderer;
