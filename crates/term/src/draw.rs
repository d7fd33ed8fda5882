//! Drawing primitives that stamp shapes into a frame's future grid.
//!
//! Positions are signed so shapes centred near an edge can be passed as-is;
//! every glyph goes through [`FrameBuffer::write_cell`] and cells that land
//! off the grid are dropped.

use crate::fb::FrameBuffer;
use crate::types::{BLANK, BORDER_GLYPH};

/// Ball glyphs, centred on the ball cell.
pub const BALL_GLYPHS: [char; 3] = ['(', '*', ')'];

/// Paddle glyphs, rows `y - 2 ..= y + 2`, columns `x - 1 ..= x + 1`.
pub const PADDLE_GLYPHS: [[char; 3]; 5] = [
    ['_', '_', '_'],
    ['|', BLANK, '|'],
    ['|', BLANK, '|'],
    ['|', BLANK, '|'],
    ['\\', '_', '/'],
];

#[inline]
fn put(fb: &mut FrameBuffer, x: i32, y: i32, ch: char) {
    if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
        fb.write_cell(x, y, ch);
    }
}

/// Dash rule across the top and bottom rows.
pub fn draw_border(fb: &mut FrameBuffer) {
    let bottom = fb.height() - 1;
    for x in 0..fb.width() {
        fb.write_cell(x, 0, BORDER_GLYPH);
        fb.write_cell(x, bottom, BORDER_GLYPH);
    }
}

/// Left-to-right text starting at `(x, y)`; characters past the right edge are
/// dropped, nothing wraps.
pub fn draw_text(fb: &mut FrameBuffer, x: i32, y: i32, text: &str) {
    let width = i32::from(fb.width());
    let mut cx = x;
    for ch in text.chars() {
        if cx >= width {
            break;
        }
        put(fb, cx, y, ch);
        cx += 1;
    }
}

pub fn draw_ball(fb: &mut FrameBuffer, x: i32, y: i32) {
    for (dx, ch) in (-1..=1).zip(BALL_GLYPHS) {
        put(fb, x + dx, y, ch);
    }
}

pub fn draw_paddle(fb: &mut FrameBuffer, x: i32, y: i32) {
    for (dy, row) in (-2..=2).zip(PADDLE_GLYPHS) {
        for (dx, ch) in (-1..=1).zip(row) {
            put(fb, x + dx, y + dy, ch);
        }
    }
}
