//! Core types module - shared data structures and constants
//!
//! This module defines the small vocabulary shared by every other crate: the
//! player keys, the two sides of the court, the input trait, and the tuning
//! constants. Nothing here performs I/O.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Render loop sleep (~60 redraw attempts per second) |
//! | `DEFAULT_BALL_SPEED_MS` | 40 | Physics tick threshold after a serve |
//! | `BALL_SPEED_STEP_MS` | 3 | How much faster the ball gets per ramp |
//! | `MIN_BALL_SPEED_MS` | 1 | Fastest possible physics tick threshold |
//! | `SPEED_RAMP_INTERVAL_MS` | 15000 | Rally length that triggers a ramp |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Held-key expiry for terminals without release events |
//! | `KEY_RELEASE_FALLBACK_MS` | 1000 | Held-key expiry when release events are reported |
//!
//! # Examples
//!
//! ```
//! use term_pong_types::{Key, KeyState, Side};
//!
//! struct OnlyW;
//!
//! impl KeyState for OnlyW {
//!     fn is_held(&self, key: Key) -> bool {
//!         key == Key::P1Up
//!     }
//! }
//!
//! assert!(OnlyW.is_held(Key::P1Up));
//! assert!(!OnlyW.is_held(Key::P2Down));
//! assert_eq!(Key::for_side(Side::Right), (Key::P2Up, Key::P2Down));
//! ```

/// Render loop sleep between frames (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Ball speed after a serve, in milliseconds per physics tick (lower is faster)
pub const DEFAULT_BALL_SPEED_MS: u32 = 40;

/// Ball speed floor
pub const MIN_BALL_SPEED_MS: u32 = 1;

/// Ball speed decrement applied by one difficulty ramp
pub const BALL_SPEED_STEP_MS: u32 = 3;

/// Rally duration without a score before the ball speeds up (15 seconds)
pub const SPEED_RAMP_INTERVAL_MS: u64 = 15_000;

/// Highest displayable score; one more point wraps to zero
pub const SCORE_CAP: u32 = 9999;

/// Distance of each paddle's centre column from its side edge
pub const PADDLE_INSET: u16 = 6;

/// Preferred paddle centre row at startup (clamped into the court)
pub const PADDLE_START_Y: u16 = 20;

/// In terminals without key-release events, a key not seen again within this
/// window reads as released.
pub const KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Expiry used even when the terminal reports releases, so a release lost to
/// a focus change cannot leave a paddle moving. Key repeat keeps held keys
/// fresh well inside this window.
pub const KEY_RELEASE_FALLBACK_MS: u64 = 1_000;

/// Smallest grid the court layout fits into (score labels and paddle clearance).
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

/// Title stamped into the top border.
pub const TITLE: &str = "Pong";

/// Glyphs.
pub const BLANK: char = ' ';
pub const BORDER_GLYPH: char = '-';

/// Which half of the court a player defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side of the court.
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Paddle control keys.
///
/// - **P1Up / P1Down**: `W` / `S`, left paddle
/// - **P2Up / P2Down**: arrow up / arrow down, right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::P1Up, Key::P1Down, Key::P2Up, Key::P2Down];

    /// Dense index, usable for fixed-size per-key tables.
    pub fn index(self) -> usize {
        match self {
            Key::P1Up => 0,
            Key::P1Down => 1,
            Key::P2Up => 2,
            Key::P2Down => 3,
        }
    }

    /// Keys that move the given side's paddle, as `(up, down)`.
    pub fn for_side(side: Side) -> (Key, Key) {
        match side {
            Side::Left => (Key::P1Up, Key::P1Down),
            Side::Right => (Key::P2Up, Key::P2Down),
        }
    }
}

/// Instantaneous keyboard snapshot: "is this key held right now".
///
/// Presses between two polls that are already released are invisible.
pub trait KeyState {
    fn is_held(&self, key: Key) -> bool;
}

/// No keys held.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKeys;

impl KeyState for NoKeys {
    fn is_held(&self, _key: Key) -> bool {
        false
    }
}

/// A fixed set of held keys, mostly useful for scripted input.
impl KeyState for [Key] {
    fn is_held(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

impl<const N: usize> KeyState for [Key; N] {
    fn is_held(&self, key: Key) -> bool {
        self.contains(&key)
    }
}
