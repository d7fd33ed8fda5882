//! Terminal Pong (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `term_pong::{core,engine,input,term,types}`.

pub use term_pong_core as core;
pub use term_pong_engine as engine;
pub use term_pong_input as input;
pub use term_pong_term as term;
pub use term_pong_types as types;
