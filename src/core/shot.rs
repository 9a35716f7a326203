//! Shot routine: a projectile that flies until it leaves the interior.

use crate::core::canvas::Canvas;
use crate::core::routine::{Poll, Routine, Signal};
use crate::types::{CellAttr, Velocity, SHOT_FLASH_SYMBOL};

/// A projectile launched from a fixed cell with a fixed per-axis velocity.
///
/// The first resumption draws a muzzle flash and beeps; later resumptions
/// draw a trail glyph matching the travel orientation. Each step erases the
/// previously drawn cell. The routine completes on the resumption whose
/// advance would leave the drawable interior, erasing itself on the way out.
#[derive(Debug, Clone)]
pub struct Shot {
    // Signed so a position past the border stays representable.
    row: i32,
    col: i32,
    velocity: Velocity,
    fired: bool,
    prev: Option<(u16, u16)>,
}

impl Shot {
    pub fn new(row: u16, col: u16, velocity: Velocity) -> Self {
        Self {
            row: i32::from(row),
            col: i32::from(col),
            velocity,
            fired: false,
            prev: None,
        }
    }

    fn trail_symbol(&self) -> char {
        if self.velocity.is_horizontal() {
            '-'
        } else {
            '|'
        }
    }

    fn in_interior(row: i32, col: i32, rows: u16, cols: u16) -> bool {
        row >= 1 && row <= i32::from(rows) - 2 && col >= 1 && col <= i32::from(cols) - 2
    }
}

impl Routine for Shot {
    fn resume(&mut self, canvas: &mut dyn Canvas) -> Poll {
        let (rows, cols) = canvas.bounds();

        if let Some((r, c)) = self.prev.take() {
            canvas.set_cell(r, c, ' ', CellAttr::Normal);
        }

        // A launch cell outside the interior completes without drawing.
        if !Self::in_interior(self.row, self.col, rows, cols) {
            return Poll::Complete;
        }

        let symbol = if self.fired {
            self.trail_symbol()
        } else {
            self.fired = true;
            canvas.beep();
            SHOT_FLASH_SYMBOL
        };

        let (r, c) = (self.row as u16, self.col as u16);
        canvas.set_cell(r, c, symbol, CellAttr::Normal);

        self.row += self.velocity.rows;
        self.col += self.velocity.cols;

        if !Self::in_interior(self.row, self.col, rows, cols) {
            canvas.set_cell(r, c, ' ', CellAttr::Normal);
            return Poll::Complete;
        }

        self.prev = Some((r, c));
        Poll::Yield(Signal::Ticks(0))
    }
}
