use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Result;

use term_pong::core::{Ball, Clock, GameState, ManualClock};
use term_pong::engine::FrameLoop;
use term_pong::term::CellSink;
use term_pong::types::Key;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[derive(Default)]
struct CountingSink {
    writes: usize,
}

impl CellSink for CountingSink {
    fn put(&mut self, _x: u16, _y: u16, _ch: char) -> Result<()> {
        self.writes += 1;
        Ok(())
    }
}

#[test]
fn frame_step_is_allocation_free_after_warmup() {
    let clock = ManualClock::new(0);
    let mut frame = FrameLoop::new(GameState::new(80, 24, 1, clock.now_ms()));
    let mut sink = CountingSink::default();
    let held = [Key::P1Up, Key::P2Down];

    // Warm-up: first full frame, then a point so the scoring path has run once.
    frame.step(clock.now_ms(), &held, &mut sink).unwrap();
    frame.game_mut().place_ball(Ball {
        x: 2,
        y: 12,
        moving_up: true,
        moving_left: true,
    });
    clock.advance(40);
    frame.step(clock.now_ms(), &held, &mut sink).unwrap();
    assert_eq!(frame.game().score().right, 1);

    let allocs = with_alloc_counting(|| {
        for _ in 0..500 {
            clock.advance(16);
            frame.step(clock.now_ms(), &held, &mut sink).unwrap();
        }
    });

    assert!(sink.writes > 0);
    assert!(allocs == 0);
}
