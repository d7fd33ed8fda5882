//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: frames are drawn into a
//! present/future pair of character grids and only the cells that changed
//! since the last frame are sent to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Minimise terminal output so large terminals do not flicker
//! - Keep terminal I/O behind the [`CellSink`] trait so publishing is testable

pub mod draw;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_pong_core as core;
pub use term_pong_types as types;

pub use draw::{draw_ball, draw_border, draw_paddle, draw_text};
pub use fb::{CellSink, FrameBuffer, Grid};
pub use game_view::GameView;
pub use renderer::{encode_put_into, with_session, TerminalRenderer, TerminalSession};
