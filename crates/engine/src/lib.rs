//! Frame loop: one pass of draw, simulate, publish.
//!
//! Every frame runs the same fixed sequence:
//!
//! 1. draw the border rule
//! 2. advance the game (paddles always, ball when its speed threshold elapsed)
//! 3. stamp ball, paddles and HUD
//! 4. draw the title over the top rule
//! 5. publish only the changed cells
//!
//! Sleeping between frames is left to the caller so tests can step frames
//! back to back with a manual clock.

use anyhow::Result;

use term_pong_core::GameState;
use term_pong_term::{draw_border, draw_text, CellSink, FrameBuffer, GameView};
use term_pong_types::{KeyState, TITLE};

pub use term_pong_core as core;
pub use term_pong_term as term;
pub use term_pong_types as types;

/// Column where the title starts on the top rule.
const TITLE_X: i32 = 2;

/// Owns the frame buffer and the match for the lifetime of the process.
pub struct FrameLoop {
    fb: FrameBuffer,
    game: GameState,
    view: GameView,
    frames: u64,
}

impl FrameLoop {
    /// The frame buffer takes the game's grid size.
    pub fn new(game: GameState) -> Self {
        let fb = FrameBuffer::new(game.width(), game.height());
        Self {
            fb,
            game,
            view: GameView::new(),
            frames: 0,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at `now_ms` and publish it into `sink`.
    ///
    /// Returns the number of cells written.
    pub fn step<K, S>(&mut self, now_ms: u64, keys: &K, sink: &mut S) -> Result<usize>
    where
        K: KeyState + ?Sized,
        S: CellSink + ?Sized,
    {
        draw_border(&mut self.fb);
        self.game.tick(now_ms, keys);
        self.view.stamp(&self.game, &mut self.fb);
        draw_text(&mut self.fb, TITLE_X, 0, TITLE);

        let written = self.fb.publish(sink)?;
        self.frames += 1;
        Ok(written)
    }
}
