//! Terminal Pong runner (default binary).
//!
//! Two players share one keyboard: `W`/`S` move the left paddle, the arrow
//! keys move the right one. `q`, Esc or Ctrl-C quits.
//!
//! Set `TERM_PONG_LOG=<path>` to write debug logs to a file; the playfield
//! owns the terminal, so nothing is ever logged to it.

use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use tracing::{info, warn};

use term_pong::core::{Clock, GameState, MonotonicClock};
use term_pong::engine::FrameLoop;
use term_pong::input::{should_quit, HeldKeys};
use term_pong::term::{with_session, TerminalRenderer};
use term_pong::types::{FRAME_MS, MIN_HEIGHT, MIN_WIDTH};

const LOG_PATH_ENV: &str = "TERM_PONG_LOG";

fn main() -> Result<()> {
    init_logging()?;

    let (width, height) = terminal::size().context("failed to query terminal size")?;
    ensure!(
        width >= MIN_WIDTH && height >= MIN_HEIGHT,
        "terminal is {width}x{height}, Pong needs at least {MIN_WIDTH}x{MIN_HEIGHT}"
    );
    info!(width, height, "starting");

    // Restore is attempted on every path, including a half-finished enter.
    let mut term = TerminalRenderer::new();
    with_session(&mut term, |term| {
        let release_events = request_release_events();
        let result = run(term, width, height, release_events);
        if release_events {
            if let Err(err) = execute!(io::stdout(), PopKeyboardEnhancementFlags) {
                warn!(?err, "failed to pop keyboard enhancement flags");
            }
        }
        result
    })
}

fn run(term: &mut TerminalRenderer, width: u16, height: u16, release_events: bool) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut frame = FrameLoop::new(GameState::new(width, height, seed(), clock.now_ms()));
    let mut keys = if release_events {
        HeldKeys::new().with_release_events()
    } else {
        HeldKeys::new()
    };
    info!(
        release_events,
        release_timeout_ms = keys.release_timeout_ms(),
        "input ready"
    );
    let frame_time = Duration::from_millis(FRAME_MS);

    loop {
        let now_ms = clock.now_ms();

        // Drain everything that arrived since the last frame without blocking.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        let score = frame.game().score();
                        info!(
                            frames = frame.frames(),
                            left = score.left,
                            right = score.right,
                            "quit requested"
                        );
                        return Ok(());
                    }
                    keys.handle_key_event(key, now_ms);
                }
                // Releases for keys held while unfocused never arrive.
                Event::FocusLost => keys.release_all(),
                _ => {}
            }
        }
        keys.update(now_ms);

        frame.step(now_ms, &keys, term)?;
        term.flush()?;

        thread::sleep(frame_time);
    }
}

/// Ask the terminal for key release events. Returns whether it agreed.
fn request_release_events() -> bool {
    if !matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
        info!("no key release events, falling back to release timeout");
        return false;
    }
    match execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    ) {
        Ok(()) => true,
        Err(err) => {
            warn!(?err, "failed to enable key release events");
            false
        }
    }
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
