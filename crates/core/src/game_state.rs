//! Game state module - ball physics, paddles, scoring and the speed ramp
//!
//! The whole match lives in one [`GameState`] value that the frame loop owns
//! and advances with [`GameState::tick`]. Coordinates are 0-based grid cells:
//! rows `0` and `height - 1` hold the border rule, so the ball centre stays in
//! `[2, width - 2] x [2, height - 2]` and a paddle's five rows stay within
//! `[1, height - 2]`.

use tracing::debug;

use crate::config::GameConfig;
use crate::rng::SimpleRng;
use crate::scoring::Score;
use crate::types::{Key, KeyState, Side, MIN_HEIGHT, MIN_WIDTH};

/// Paddle half-extent in rows; the drawn glyphs span `y - 2 ..= y + 2`.
pub const PADDLE_HALF_HEIGHT: i32 = 2;
/// Paddle half-extent in columns; the hit-box spans `x - 1 ..= x + 1`.
pub const PADDLE_HALF_WIDTH: i32 = 1;

/// Smallest ball coordinate on either axis.
const BALL_MIN: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub moving_up: bool,
    pub moving_left: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    pub side: Side,
    pub x: i32,
    pub y: i32,
}

impl Paddle {
    /// Whether a ball centred at `(x, y)` touches this paddle.
    pub fn hits(&self, x: i32, y: i32) -> bool {
        (x - self.x).abs() <= PADDLE_HALF_WIDTH && (y - self.y).abs() <= PADDLE_HALF_HEIGHT
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    width: u16,
    height: u16,
    ball: Ball,
    /// Current physics tick threshold in ms (lower is faster).
    ball_speed_ms: u32,
    paddles: [Paddle; 2],
    score: Score,
    last_tick_ms: u64,
    last_score_ms: u64,
    rng: SimpleRng,
}

impl GameState {
    /// Create a match on a `width x height` grid with default tuning.
    ///
    /// # Panics
    ///
    /// If the grid is smaller than `MIN_WIDTH x MIN_HEIGHT`.
    pub fn new(width: u16, height: u16, seed: u32, now_ms: u64) -> Self {
        Self::with_config(width, height, GameConfig::default(), seed, now_ms)
    }

    /// Create a match with explicit tuning.
    ///
    /// # Panics
    ///
    /// If the grid is smaller than `MIN_WIDTH x MIN_HEIGHT`.
    pub fn with_config(
        width: u16,
        height: u16,
        config: GameConfig,
        seed: u32,
        now_ms: u64,
    ) -> Self {
        assert!(
            width >= MIN_WIDTH && height >= MIN_HEIGHT,
            "court needs at least {MIN_WIDTH}x{MIN_HEIGHT} cells, got {width}x{height}"
        );

        let mut rng = SimpleRng::new(seed);
        let moving_up = rng.coin_flip();
        let moving_left = rng.coin_flip();

        let inset = i32::from(config.paddle_inset);
        let start_y = i32::from(config.paddle_start_y);
        let mut state = Self {
            config,
            width,
            height,
            ball: Ball {
                x: i32::from(width / 2),
                y: i32::from(height / 2),
                moving_up,
                moving_left,
            },
            ball_speed_ms: config.default_ball_speed_ms,
            paddles: [
                Paddle {
                    side: Side::Left,
                    x: inset,
                    y: start_y,
                },
                Paddle {
                    side: Side::Right,
                    x: i32::from(width) - inset,
                    y: start_y,
                },
            ],
            score: Score::new(),
            last_tick_ms: now_ms,
            last_score_ms: now_ms,
            rng,
        };
        let (min, max) = (state.paddle_min_y(), state.paddle_max_y());
        for paddle in &mut state.paddles {
            paddle.y = paddle.y.clamp(min, max);
        }
        state
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn ball_speed_ms(&self) -> u32 {
        self.ball_speed_ms
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.paddles[side_index(side)]
    }

    pub fn paddles(&self) -> &[Paddle; 2] {
        &self.paddles
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Put the ball somewhere specific (clamped into the court interior).
    ///
    /// Used for scripted scenarios; normal play never needs it.
    pub fn place_ball(&mut self, ball: Ball) {
        self.ball = ball;
        self.clamp_ball();
    }

    /// Move a paddle to row `y` (clamped so its glyphs stay off the border).
    pub fn place_paddle(&mut self, side: Side, y: i32) {
        let (min, max) = (self.paddle_min_y(), self.paddle_max_y());
        self.paddles[side_index(side)].y = y.clamp(min, max);
    }

    /// Ball bounds as `(min_x, max_x, min_y, max_y)`, all inclusive.
    pub fn ball_bounds(&self) -> (i32, i32, i32, i32) {
        (
            BALL_MIN,
            i32::from(self.width) - 2,
            BALL_MIN,
            i32::from(self.height) - 2,
        )
    }

    /// Highest legal paddle centre row (top glyph lands on row 1).
    pub fn paddle_min_y(&self) -> i32 {
        1 + PADDLE_HALF_HEIGHT
    }

    /// Lowest legal paddle centre row (bottom glyph lands on row `height - 2`).
    pub fn paddle_max_y(&self) -> i32 {
        i32::from(self.height) - 2 - PADDLE_HALF_HEIGHT
    }

    /// Advance the match to `now_ms`.
    ///
    /// The ball moves at most one cell per axis per call, and only once
    /// `ball_speed_ms` has passed since its last move; the paddles respond to
    /// `keys` on every call. Returns `true` when the ball advanced.
    pub fn tick<K: KeyState + ?Sized>(&mut self, now_ms: u64, keys: &K) -> bool {
        let advanced = now_ms.saturating_sub(self.last_tick_ms) >= u64::from(self.ball_speed_ms);
        if advanced {
            self.step_ball(now_ms);
        }

        for side in [Side::Left, Side::Right] {
            let (up, down) = Key::for_side(side);
            self.nudge_paddle(side, keys.is_held(up), keys.is_held(down));
        }

        advanced
    }

    fn step_ball(&mut self, now_ms: u64) {
        // The longer a rally lasts, the faster the ball gets.
        if now_ms.saturating_sub(self.last_score_ms) >= self.config.speed_ramp_interval_ms {
            self.ball_speed_ms = self
                .ball_speed_ms
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_ball_speed_ms);
            self.last_score_ms = now_ms;
            debug!(ball_speed_ms = self.ball_speed_ms, "rally speed-up");
        }

        let (min_x, max_x, min_y, max_y) = self.ball_bounds();

        // Ceiling / floor.
        if self.ball.y <= min_y || self.ball.y >= max_y {
            self.ball.moving_up = !self.ball.moving_up;
        }

        // Side walls: the defender on that side concedes.
        if self.ball.x <= min_x || self.ball.x >= max_x {
            let defender = if self.ball.x <= min_x {
                Side::Left
            } else {
                Side::Right
            };
            let scorer = defender.opponent();
            self.score.award(scorer, self.config.score_cap);
            self.last_score_ms = now_ms;
            self.ball_speed_ms = self.config.default_ball_speed_ms;
            self.serve();
            debug!(
                scorer = scorer.as_str(),
                left = self.score.left,
                right = self.score.right,
                "point scored"
            );
        }

        // Checked even right after a serve.
        let (x, y) = (self.ball.x, self.ball.y);
        if self.paddles.iter().any(|p| p.hits(x, y)) {
            self.ball.moving_left = !self.ball.moving_left;
        }

        self.ball.y += if self.ball.moving_up { -1 } else { 1 };
        self.ball.x += if self.ball.moving_left { -1 } else { 1 };
        self.clamp_ball();

        self.last_tick_ms = now_ms;
    }

    /// Recentre the ball and pick a fresh random direction.
    fn serve(&mut self) {
        self.ball.x = i32::from(self.width / 2);
        self.ball.y = i32::from(self.height / 2);
        self.ball.moving_up = self.rng.coin_flip();
        self.ball.moving_left = self.rng.coin_flip();
    }

    fn nudge_paddle(&mut self, side: Side, up: bool, down: bool) {
        let (min, max) = (self.paddle_min_y(), self.paddle_max_y());
        let paddle = &mut self.paddles[side_index(side)];
        if up && paddle.y > min {
            paddle.y -= 1;
        }
        if down && paddle.y < max {
            paddle.y += 1;
        }
    }

    fn clamp_ball(&mut self) {
        let (min_x, max_x, min_y, max_y) = self.ball_bounds();
        self.ball.x = self.ball.x.clamp(min_x, max_x);
        self.ball.y = self.ball.y.clamp(min_y, max_y);
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}
