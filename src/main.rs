//! Starfield runner (default binary).
//!
//! Terminal glue only: raw-mode lifecycle, quit keys, and flushing the
//! framebuffer. The animation itself lives in `core` and is paced by the
//! scheduler; the pacing sleep doubles as the input-poll timeout here.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_starfield::core::{build_scene, Canvas, Scheduler, SceneOptions, SimpleRng};
use tui_starfield::term::{TermCanvas, TerminalRenderer};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut canvas = TermCanvas::new(height, width);

    let mut rng = SimpleRng::new(clock_seed());
    let routines = build_scene(canvas.bounds(), &SceneOptions::default(), &mut rng)?;
    let mut sched = Scheduler::new(routines);

    // Border and empty sky before the first tick.
    term.draw(canvas.fb())?;
    canvas.take_dirty();

    loop {
        let report = sched.tick(&mut canvas);

        if canvas.take_dirty() {
            term.draw(canvas.fb())?;
        }
        if canvas.take_bell() {
            term.beep()?;
        }

        if report.active == 0 {
            return Ok(());
        }

        // The pacing sleep doubles as the quit-key wait.
        if event::poll(report.sleep)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
