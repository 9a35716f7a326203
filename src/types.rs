//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Scheduler target tick interval (milliseconds), used when no routine
/// requests a shorter wait.
pub const TICK_MS: u64 = 100;

/// Default star population for the full-screen scene
pub const STAR_COUNT: usize = 200;

/// Alphabet a star symbol is picked from
pub const STAR_SYMBOLS: &[char] = &['+', '*', '.', ':'];

/// Star blink phase durations (milliseconds)
pub const STAR_DIM_MS: u64 = 500;
pub const STAR_PLAIN_MS: u64 = 300;
pub const STAR_BOLD_MS: u64 = 500;

/// Per-star start offset range (microseconds), so stars don't pulse in sync
pub const STAR_OFFSET_MIN_US: u64 = 100;
pub const STAR_OFFSET_MAX_US: u64 = 10_000;

/// Muzzle-flash glyph drawn on a shot's first frame
pub const SHOT_FLASH_SYMBOL: char = '*';

/// Display attribute for a drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAttr {
    #[default]
    Normal,
    Dim,
    Bold,
}

/// Per-resumption displacement of a moving routine, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub rows: i32,
    pub cols: i32,
}

impl Velocity {
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// True when the motion has no vertical component
    pub const fn is_horizontal(&self) -> bool {
        self.rows == 0
    }
}
