//! Blinking ASCII starfield driven by a hand-rolled cooperative scheduler.
//!
//! `core` holds the scheduler and the animation routines (deterministic,
//! I/O-free); `term` flushes the shared framebuffer to a real terminal via
//! crossterm; `types` carries the shared constants and plain data types.

pub mod core;
pub mod term;
pub mod types;
