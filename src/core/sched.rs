//! Cooperative scheduler: the single-threaded loop driving every routine.
//!
//! One tick resumes each eligible routine once, in Active Set order. A
//! routine suspends with a [`Signal`] or completes and is removed. All
//! real-time sleeping happens here, never inside a routine.

use std::time::{Duration, Instant};

use crate::core::canvas::Canvas;
use crate::core::routine::{Poll, Routine, Signal};
use crate::types::TICK_MS;

struct Entry {
    routine: Box<dyn Routine>,
    /// First tick index this entry is eligible to be resumed on.
    wake_tick: u64,
}

/// What one tick did, and how long the caller should wait before the next.
///
/// `sleep` is the target interval (or the minimum delay requested by a
/// routine this tick, whichever is smaller budget) minus the time the tick's
/// work took, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Routines still alive after this tick.
    pub active: usize,
    /// Routines resumed this tick (completions included).
    pub resumed: usize,
    pub sleep: Duration,
}

pub struct Scheduler {
    entries: Vec<Entry>,
    target_interval: Duration,
    tick_index: u64,
}

impl Scheduler {
    pub fn new(routines: Vec<Box<dyn Routine>>) -> Self {
        Self::with_interval(routines, Duration::from_millis(TICK_MS))
    }

    pub fn with_interval(routines: Vec<Box<dyn Routine>>, target_interval: Duration) -> Self {
        let entries = routines
            .into_iter()
            .map(|routine| Entry {
                routine,
                wake_tick: 0,
            })
            .collect();
        Self {
            entries,
            target_interval,
            tick_index: 0,
        }
    }

    /// Routines currently in the Active Set.
    pub fn active(&self) -> usize {
        self.entries.len()
    }

    /// Run one tick: resume every eligible routine once, collect suspension
    /// requests, drop completed routines, and compute the pacing sleep.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) -> TickReport {
        let started = Instant::now();
        self.tick_index += 1;
        let tick = self.tick_index;

        let mut min_delay: Option<Duration> = None;
        let mut resumed = 0;

        // Only entries present at tick start are visited. Removal shifts the
        // bound down with the vector, so neighbors of a completed routine are
        // neither skipped nor resumed twice.
        let mut len = self.entries.len();
        let mut i = 0;
        while i < len {
            if self.entries[i].wake_tick > tick {
                i += 1;
                continue;
            }

            match self.entries[i].routine.resume(canvas) {
                Poll::Yield(signal) => {
                    resumed += 1;
                    match signal {
                        Signal::Delay(d) => {
                            min_delay = Some(min_delay.map_or(d, |m| m.min(d)));
                        }
                        Signal::Ticks(k) => {
                            // "Skip the next k ticks": eligible again at
                            // tick + k + 1. No effect on pacing.
                            self.entries[i].wake_tick = tick + u64::from(k) + 1;
                        }
                    }
                    canvas.refresh();
                    i += 1;
                }
                Poll::Complete => {
                    resumed += 1;
                    self.entries.remove(i);
                    len -= 1;
                }
            }
        }

        // The most impatient routine overrides the fixed frame rate.
        let budget = min_delay.unwrap_or(self.target_interval);
        let sleep = budget.saturating_sub(started.elapsed());

        TickReport {
            active: self.entries.len(),
            resumed,
            sleep,
        }
    }

    /// Headless loop: tick, sleep, repeat until the Active Set is empty.
    ///
    /// Interactive callers drive [`Scheduler::tick`] themselves so the pacing
    /// sleep can double as an input wait.
    pub fn run(&mut self, canvas: &mut dyn Canvas) {
        while !self.entries.is_empty() {
            let report = self.tick(canvas);
            if report.sleep > Duration::ZERO {
                std::thread::sleep(report.sleep);
            }
        }
    }
}
