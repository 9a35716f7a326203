//! Scheduler tests: tick traversal, removal safety, and pacing.

mod common;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use common::RecordingCanvas;
use tui_starfield::core::{build_scene, Canvas, Poll, Routine, Scheduler, SceneOptions, Signal, SimpleRng};

/// Yields a fixed signal until (optionally) completing on the n-th resumption.
#[derive(Debug)]
struct Scripted {
    resumed: Rc<Cell<u32>>,
    completes_on: Option<u32>,
    signal: Signal,
}

impl Scripted {
    fn new(resumed: &Rc<Cell<u32>>, completes_on: Option<u32>, signal: Signal) -> Box<Self> {
        Box::new(Self {
            resumed: Rc::clone(resumed),
            completes_on,
            signal,
        })
    }
}

impl Routine for Scripted {
    fn resume(&mut self, _canvas: &mut dyn Canvas) -> Poll {
        let n = self.resumed.get() + 1;
        self.resumed.set(n);
        if Some(n) == self.completes_on {
            Poll::Complete
        } else {
            Poll::Yield(self.signal)
        }
    }
}

/// Burns real time before yielding, to simulate a tick that overruns its budget.
#[derive(Debug)]
struct Slow {
    work: Duration,
    request: Duration,
}

impl Routine for Slow {
    fn resume(&mut self, _canvas: &mut dyn Canvas) -> Poll {
        std::thread::sleep(self.work);
        Poll::Yield(Signal::Delay(self.request))
    }
}

#[test]
fn mid_tick_removal_skips_no_neighbor() {
    let counters: Vec<Rc<Cell<u32>>> = (0..3).map(|_| Rc::new(Cell::new(0))).collect();
    let zero = Signal::Delay(Duration::ZERO);

    // The middle routine completes on the very first tick.
    let routines: Vec<Box<dyn Routine>> = vec![
        Scripted::new(&counters[0], None, zero),
        Scripted::new(&counters[1], Some(1), zero),
        Scripted::new(&counters[2], None, zero),
    ];
    let mut sched = Scheduler::with_interval(routines, Duration::ZERO);
    let mut canvas = RecordingCanvas::new(24, 80);

    let report = sched.tick(&mut canvas);

    // Each routine was resumed exactly once that tick, and only the middle
    // one is gone.
    assert_eq!(report.resumed, 3);
    assert_eq!(report.active, 2);
    for counter in &counters {
        assert_eq!(counter.get(), 1);
    }

    sched.tick(&mut canvas);
    assert_eq!(counters[0].get(), 2);
    assert_eq!(counters[1].get(), 1);
    assert_eq!(counters[2].get(), 2);
}

#[test]
fn requested_delay_overrides_target_interval() {
    let counter = Rc::new(Cell::new(0));
    let routines: Vec<Box<dyn Routine>> = vec![Scripted::new(
        &counter,
        None,
        Signal::Delay(Duration::from_millis(250)),
    )];
    let mut sched = Scheduler::with_interval(routines, Duration::from_millis(100));
    let mut canvas = RecordingCanvas::new(24, 80);

    let report = sched.tick(&mut canvas);
    assert!(report.sleep > Duration::from_millis(200));
    assert!(report.sleep <= Duration::from_millis(250));
}

#[test]
fn most_impatient_routine_wins() {
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let routines: Vec<Box<dyn Routine>> = vec![
        Scripted::new(&a, None, Signal::Delay(Duration::from_millis(400))),
        Scripted::new(&b, None, Signal::Delay(Duration::from_millis(5))),
    ];
    let mut sched = Scheduler::with_interval(routines, Duration::from_millis(100));
    let mut canvas = RecordingCanvas::new(24, 80);

    let report = sched.tick(&mut canvas);
    assert!(report.sleep <= Duration::from_millis(5));
}

#[test]
fn overrun_tick_never_sleeps_negative() {
    let routines: Vec<Box<dyn Routine>> = vec![Box::new(Slow {
        work: Duration::from_millis(5),
        request: Duration::from_millis(1),
    })];
    let mut sched = Scheduler::with_interval(routines, Duration::from_millis(1));
    let mut canvas = RecordingCanvas::new(24, 80);

    let report = sched.tick(&mut canvas);
    assert_eq!(report.sleep, Duration::ZERO);
}

#[test]
fn run_drains_a_completing_scene() {
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let zero = Signal::Delay(Duration::ZERO);
    let routines: Vec<Box<dyn Routine>> = vec![
        Scripted::new(&a, Some(3), zero),
        Scripted::new(&b, Some(5), zero),
    ];
    let mut sched = Scheduler::with_interval(routines, Duration::ZERO);
    let mut canvas = RecordingCanvas::new(24, 80);

    sched.run(&mut canvas);

    assert_eq!(sched.active(), 0);
    assert_eq!(a.get(), 3);
    assert_eq!(b.get(), 5);
    // One refresh per yielding resumption: a yields twice, b four times.
    assert_eq!(canvas.refreshes, 6);
}

#[test]
fn ten_ticks_of_stars_keep_the_set_full() {
    let mut rng = SimpleRng::new(99);
    let opts = SceneOptions {
        stars: 5,
        shot: false,
    };
    let routines = build_scene((20, 20), &opts, &mut rng).unwrap();
    let mut sched = Scheduler::with_interval(routines, Duration::ZERO);
    let mut canvas = RecordingCanvas::new(20, 20);

    for _ in 0..10 {
        let before = canvas.refreshes;
        let report = sched.tick(&mut canvas);

        // Stars never complete, and every yielding tick refreshed the surface.
        assert_eq!(report.active, 5);
        assert!(canvas.refreshes > before);
    }
    assert_eq!(sched.active(), 5);
}
