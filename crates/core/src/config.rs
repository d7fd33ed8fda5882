//! Game tuning knobs.
//!
//! There is no user-facing configuration; this struct exists so the magic
//! thresholds live in one place and tests can shrink or stretch them.

use crate::types::{
    BALL_SPEED_STEP_MS, DEFAULT_BALL_SPEED_MS, MIN_BALL_SPEED_MS, PADDLE_INSET, PADDLE_START_Y,
    SCORE_CAP, SPEED_RAMP_INTERVAL_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Physics tick threshold after every serve (ms, lower is faster).
    pub default_ball_speed_ms: u32,
    /// Floor for the speed ramp.
    pub min_ball_speed_ms: u32,
    /// Threshold decrement per ramp.
    pub speed_step_ms: u32,
    /// Rally length without a score that triggers one ramp.
    pub speed_ramp_interval_ms: u64,
    /// Highest score; the next point wraps to zero.
    pub score_cap: u32,
    /// Paddle centre column distance from each side edge.
    pub paddle_inset: u16,
    /// Preferred starting row for both paddles.
    pub paddle_start_y: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_ball_speed_ms: DEFAULT_BALL_SPEED_MS,
            min_ball_speed_ms: MIN_BALL_SPEED_MS,
            speed_step_ms: BALL_SPEED_STEP_MS,
            speed_ramp_interval_ms: SPEED_RAMP_INTERVAL_MS,
            score_cap: SCORE_CAP,
            paddle_inset: PADDLE_INSET,
            paddle_start_y: PADDLE_START_Y,
        }
    }
}
