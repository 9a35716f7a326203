//! Star routine: an endless four-phase blink.

use std::time::Duration;

use crate::core::canvas::Canvas;
use crate::core::routine::{Poll, Routine, Signal};
use crate::types::{CellAttr, STAR_BOLD_MS, STAR_DIM_MS, STAR_PLAIN_MS};

/// Suspension payload yielded after each blink phase.
///
/// The plain signal is used twice per cycle, once on the way up and once on
/// the way down. Phases may be timed in wall-clock delays or in tick counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarTiming {
    pub dim: Signal,
    pub plain: Signal,
    pub bold: Signal,
}

impl Default for StarTiming {
    fn default() -> Self {
        Self {
            dim: Signal::Delay(Duration::from_millis(STAR_DIM_MS)),
            plain: Signal::Delay(Duration::from_millis(STAR_PLAIN_MS)),
            bold: Signal::Delay(Duration::from_millis(STAR_BOLD_MS)),
        }
    }
}

impl StarTiming {
    /// Tick-count timing: each phase lasts the given number of ticks.
    pub fn ticks(dim: u32, plain: u32, bold: u32) -> Self {
        Self {
            dim: Signal::Ticks(dim),
            plain: Signal::Ticks(plain),
            bold: Signal::Ticks(bold),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dim,
    Rising,
    Bold,
    Falling,
}

impl Phase {
    fn next(self) -> Self {
        match self {
            Phase::Dim => Phase::Rising,
            Phase::Rising => Phase::Bold,
            Phase::Bold => Phase::Falling,
            Phase::Falling => Phase::Dim,
        }
    }
}

/// A star that cycles dim -> plain -> bold -> plain forever.
///
/// One phase is drawn per resumption; the routine never completes.
#[derive(Debug, Clone)]
pub struct Star {
    row: u16,
    col: u16,
    symbol: char,
    timing: StarTiming,
    phase: Phase,
    /// Folded into the first yielded delay so stars start out of phase.
    pending_offset: Option<Duration>,
}

impl Star {
    pub fn new(row: u16, col: u16, symbol: char) -> Self {
        Self {
            row,
            col,
            symbol,
            timing: StarTiming::default(),
            phase: Phase::Dim,
            pending_offset: None,
        }
    }

    pub fn with_timing(mut self, timing: StarTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Delay added to the first suspension. Only meaningful for delay-shaped
    /// timings; tick-count phases ignore it.
    pub fn with_offset(mut self, offset: Duration) -> Self {
        self.pending_offset = Some(offset);
        self
    }
}

impl Routine for Star {
    fn resume(&mut self, canvas: &mut dyn Canvas) -> Poll {
        let (attr, mut signal) = match self.phase {
            Phase::Dim => (CellAttr::Dim, self.timing.dim),
            Phase::Rising | Phase::Falling => (CellAttr::Normal, self.timing.plain),
            Phase::Bold => (CellAttr::Bold, self.timing.bold),
        };

        canvas.set_cell(self.row, self.col, self.symbol, attr);

        if let Some(offset) = self.pending_offset.take() {
            if let Signal::Delay(d) = signal {
                signal = Signal::Delay(d + offset);
            }
        }

        self.phase = self.phase.next();
        Poll::Yield(signal)
    }
}
