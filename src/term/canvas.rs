//! TermCanvas: the terminal-backed implementation of [`Canvas`].
//!
//! Routines draw into a retained framebuffer; `refresh` marks it pending and
//! the binary flushes through [`TerminalRenderer`](crate::term::TerminalRenderer)
//! at its own seam, keeping terminal I/O errors out of the animation core.

use crate::core::Canvas;
use crate::term::fb::FrameBuffer;
use crate::types::CellAttr;

pub struct TermCanvas {
    fb: FrameBuffer,
    dirty: bool,
    bell: bool,
}

impl TermCanvas {
    /// A `rows` x `cols` surface with the border pre-drawn.
    pub fn new(rows: u16, cols: u16) -> Self {
        let mut fb = FrameBuffer::new(cols, rows);
        fb.draw_border();
        Self {
            fb,
            dirty: true,
            bell: false,
        }
    }

    pub fn fb(&self) -> &FrameBuffer {
        &self.fb
    }

    /// True once per pending refresh; cleared by the call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// True once per pending bell; cleared by the call.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl Canvas for TermCanvas {
    fn set_cell(&mut self, row: u16, col: u16, symbol: char, attr: CellAttr) {
        let (rows, cols) = self.bounds();
        // Out-of-interior writes are a routine defect, not a runtime condition.
        assert!(
            row >= 1 && row <= rows - 2 && col >= 1 && col <= cols - 2,
            "draw outside the interior: ({row}, {col}) on a {rows}x{cols} surface"
        );
        self.fb.put_char(col, row, symbol, attr);
    }

    fn refresh(&mut self) {
        self.dirty = true;
    }

    fn bounds(&self) -> (u16, u16) {
        (self.fb.height(), self.fb.width())
    }

    fn beep(&mut self) {
        self.bell = true;
    }
}
