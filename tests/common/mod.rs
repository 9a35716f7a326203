//! Shared test double for the drawing surface.

#![allow(dead_code)]

use tui_starfield::core::Canvas;
use tui_starfield::types::CellAttr;

/// Records every draw call; stands in for a real terminal.
pub struct RecordingCanvas {
    rows: u16,
    cols: u16,
    pub cells: Vec<(u16, u16, char, CellAttr)>,
    pub refreshes: usize,
    pub beeps: usize,
}

impl RecordingCanvas {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: Vec::new(),
            refreshes: 0,
            beeps: 0,
        }
    }

    /// Attributes drawn at one cell, in draw order.
    pub fn attrs_at(&self, row: u16, col: u16) -> Vec<CellAttr> {
        self.cells
            .iter()
            .filter(|&&(r, c, _, _)| r == row && c == col)
            .map(|&(_, _, _, attr)| attr)
            .collect()
    }

    /// True if any draw landed outside the surface.
    pub fn drew_outside_surface(&self) -> bool {
        self.cells
            .iter()
            .any(|&(r, c, _, _)| r >= self.rows || c >= self.cols)
    }
}

impl Canvas for RecordingCanvas {
    fn set_cell(&mut self, row: u16, col: u16, symbol: char, attr: CellAttr) {
        self.cells.push((row, col, symbol, attr));
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }

    fn bounds(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }
}
