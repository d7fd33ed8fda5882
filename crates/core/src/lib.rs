//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Pong rules and match state. It has **no
//! dependencies** on terminals or keyboards:
//!
//! - **Deterministic**: same seed and same clock readings produce the same match
//! - **Testable**: time and randomness are injected, nothing sleeps
//! - **Portable**: the frame loop decides how state reaches the screen
//!
//! # Module Structure
//!
//! - [`clock`]: the [`Clock`] trait with a wall-clock and a manual implementation
//! - [`config`]: [`GameConfig`] tuning thresholds
//! - [`game_state`]: ball physics, paddle control, scoring, speed ramp
//! - [`rng`]: seedable coin flips for serve directions
//! - [`scoring`]: capped per-player counters
//!
//! # Example
//!
//! ```
//! use term_pong_core::{Clock, GameState, ManualClock};
//! use term_pong_core::types::{Key, Side};
//!
//! let clock = ManualClock::new(0);
//! let mut game = GameState::new(80, 24, 12345, clock.now_ms());
//!
//! // Paddles follow held keys on every call...
//! game.tick(clock.now_ms(), &[Key::P1Up]);
//! assert_eq!(game.paddle(Side::Left).y, 19);
//!
//! // ...while the ball only moves once its speed threshold has elapsed.
//! clock.advance(40);
//! assert!(game.tick(clock.now_ms(), &[] as &[Key]));
//! ```
//!
//! # Timing
//!
//! Ball speed is a threshold in milliseconds: the ball moves one cell per axis
//! each time that much time has passed since its previous move. It starts at
//! 40ms, drops by 3ms for every 15 seconds without a score (never below 1ms),
//! and resets on every point.

pub mod clock;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod scoring;

pub use term_pong_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::GameConfig;
pub use game_state::{Ball, GameState, Paddle};
pub use rng::SimpleRng;
pub use scoring::Score;
