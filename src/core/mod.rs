//! Core module - scheduler and animation routines with no I/O dependencies
//!
//! Everything here is deterministic and draws only through the [`Canvas`]
//! trait, so the whole animation can run against a mock surface in tests.

pub mod canvas;
pub mod rng;
pub mod routine;
pub mod scene;
pub mod sched;
pub mod shot;
pub mod star;

// Re-export commonly used types
pub use canvas::Canvas;
pub use rng::SimpleRng;
pub use routine::{Poll, Routine, Signal};
pub use scene::{build_scene, SceneError, SceneOptions};
pub use sched::{Scheduler, TickReport};
pub use shot::Shot;
pub use star::{Star, StarTiming};
