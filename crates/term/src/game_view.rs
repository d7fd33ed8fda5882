//! GameView: stamps a `core::GameState` into a frame buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::GameState;
use crate::draw::{draw_ball, draw_paddle, draw_text};
use crate::fb::FrameBuffer;
use crate::types::Side;

/// Columns from the right edge where the right-hand score label starts.
const RIGHT_SCORE_INSET: i32 = 11;
/// Columns from the right edge where the ball speed readout starts.
const SPEED_INSET: i32 = 15;

/// Fits "BallSpeed: 4294967295" and "Score: 4294967295".
type Label = ArrayString<32>;

/// Draws ball, paddles and the HUD for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Stamp the current state into `fb`'s future grid.
    ///
    /// This does not allocate.
    pub fn stamp(&self, game: &GameState, fb: &mut FrameBuffer) {
        let ball = game.ball();
        draw_ball(fb, ball.x, ball.y);

        for paddle in game.paddles() {
            draw_paddle(fb, paddle.x, paddle.y);
        }

        let width = i32::from(fb.width());
        let bottom = i32::from(fb.height()) - 1;
        let score = game.score();

        draw_text(fb, 1, bottom, &score_label(score.get(Side::Left)));
        draw_text(
            fb,
            width - RIGHT_SCORE_INSET,
            bottom,
            &score_label(score.get(Side::Right)),
        );
        draw_text(fb, width - SPEED_INSET, 0, &speed_label(game.ball_speed_ms()));
    }
}

fn score_label(points: u32) -> Label {
    let mut s = Label::new();
    let _ = write!(s, "Score: {points}");
    s
}

fn speed_label(ball_speed_ms: u32) -> Label {
    let mut s = Label::new();
    let _ = write!(s, "BallSpeed: {ball_speed_ms}");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ball;

    #[test]
    fn labels_format() {
        assert_eq!(score_label(42).as_str(), "Score: 42");
        assert_eq!(speed_label(40).as_str(), "BallSpeed: 40");
        assert_eq!(score_label(u32::MAX).as_str(), "Score: 4294967295");
    }

    #[test]
    fn stamps_ball_paddles_and_hud() {
        let mut game = GameState::new(80, 24, 1, 0);
        game.place_ball(Ball {
            x: 40,
            y: 12,
            moving_up: false,
            moving_left: false,
        });
        let mut fb = FrameBuffer::new(80, 24);
        GameView::new().stamp(&game, &mut fb);
        let grid = fb.future();

        assert_eq!(grid.get(39, 12), Some('('));
        assert_eq!(grid.get(40, 12), Some('*'));
        assert_eq!(grid.get(41, 12), Some(')'));

        // Left paddle centred at (6, 20).
        assert_eq!(grid.get(5, 18), Some('_'));
        assert_eq!(grid.get(5, 20), Some('|'));
        assert_eq!(grid.get(7, 22), Some('/'));
        // Right paddle centred at (74, 20).
        assert_eq!(grid.get(73, 22), Some('\\'));

        assert!(grid.row_string(23).starts_with(" Score: 0"));
        assert!(grid.row_string(23).ends_with("Score: 0   "));
        assert!(grid.row_string(0).ends_with("BallSpeed: 40  "));
    }
}
