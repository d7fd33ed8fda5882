//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto paddle [`crate::types::Key`]s and keeps a
//! "held right now" snapshot that the game polls once per frame, including in
//! terminals that never report key releases.

pub mod held;
pub mod map;

pub use term_pong_types as types;

pub use held::HeldKeys;
pub use map::{map_key, should_quit};
