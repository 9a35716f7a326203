//! Scene builder: the initial routine population.

use std::time::Duration;

use thiserror::Error;

use crate::core::rng::SimpleRng;
use crate::core::routine::Routine;
use crate::core::shot::Shot;
use crate::core::star::Star;
use crate::types::{
    Velocity, STAR_COUNT, STAR_OFFSET_MAX_US, STAR_OFFSET_MIN_US, STAR_SYMBOLS,
};

/// Configuration errors caught before any routine is constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("drawable area {rows}x{cols} has no interior cells (need at least 3x3)")]
    BoundsTooSmall { rows: u16, cols: u16 },
    #[error("a scene needs at least one star")]
    EmptyScene,
}

#[derive(Debug, Clone)]
pub struct SceneOptions {
    pub stars: usize,
    pub shot: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            stars: STAR_COUNT,
            shot: true,
        }
    }
}

/// Build the initial Active Set: `opts.stars` stars at uniform interior
/// coordinates, plus one shot launched from bottom-center when requested.
///
/// The RNG is an explicit argument so a fixed seed reproduces the scene.
pub fn build_scene(
    bounds: (u16, u16),
    opts: &SceneOptions,
    rng: &mut SimpleRng,
) -> Result<Vec<Box<dyn Routine>>, SceneError> {
    let (rows, cols) = bounds;
    if rows < 3 || cols < 3 {
        return Err(SceneError::BoundsTooSmall { rows, cols });
    }
    if opts.stars == 0 {
        return Err(SceneError::EmptyScene);
    }

    let mut routines: Vec<Box<dyn Routine>> = Vec::with_capacity(opts.stars + 1);
    for _ in 0..opts.stars {
        // Interior coordinates: [1, rows-2] x [1, cols-2].
        let row = 1 + rng.next_range(u32::from(rows) - 2) as u16;
        let col = 1 + rng.next_range(u32::from(cols) - 2) as u16;
        let symbol = *rng.choose(STAR_SYMBOLS);
        let offset = Duration::from_micros(u64::from(
            rng.uniform(STAR_OFFSET_MIN_US as u32, STAR_OFFSET_MAX_US as u32),
        ));
        routines.push(Box::new(Star::new(row, col, symbol).with_offset(offset)));
    }

    if opts.shot {
        routines.push(Box::new(Shot::new(rows - 2, cols / 2, Velocity::new(-1, 0))));
    }

    Ok(routines)
}
