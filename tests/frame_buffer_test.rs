use std::collections::HashSet;

use term_pong::core::SimpleRng;
use term_pong::term::{draw_text, FrameBuffer};
use term_pong::types::BLANK;

type Writes = Vec<(u16, u16, char)>;

#[test]
fn publish_emits_exactly_one_write_per_changed_cell() {
    let (w, h) = (80u16, 24u16);
    let mut fb = FrameBuffer::new(w, h);
    let mut rng = SimpleRng::new(2024);
    let mut prev: HashSet<(u16, u16)> = HashSet::new();

    for round in 0..20 {
        // Same border every frame, plus a fresh scatter of marks.
        for x in 0..w {
            fb.write_cell(x, 0, '-');
            fb.write_cell(x, h - 1, '-');
        }
        let mut marks = HashSet::new();
        let k = 1 + round * 3;
        while marks.len() < k {
            let x = (rng.next_u32() % u32::from(w)) as u16;
            let y = 1 + (rng.next_u32() % u32::from(h - 2)) as u16;
            marks.insert((x, y));
        }
        for &(x, y) in &marks {
            fb.write_cell(x, y, '#');
        }

        let drawn = marks.difference(&prev).count();
        let erased = prev.difference(&marks).count();
        let border = if round == 0 { 2 * usize::from(w) } else { 0 };

        let mut out = Writes::new();
        let written = fb.publish(&mut out).unwrap();
        assert_eq!(written, drawn + erased + border);
        assert_eq!(out.len(), written);
        assert_eq!(
            out.iter().filter(|&&(_, _, ch)| ch == BLANK).count(),
            erased
        );
        prev = marks;
    }
}

#[test]
fn publish_of_k_changes_from_blank_is_k_writes() {
    let mut fb = FrameBuffer::new(10, 5);
    let cells = [(0, 0), (9, 4), (3, 2), (4, 2), (5, 2)];
    for &(x, y) in &cells {
        fb.write_cell(x, y, 'o');
    }
    let mut out = Writes::new();
    assert_eq!(fb.publish(&mut out).unwrap(), cells.len());
    assert_eq!(out.len(), cells.len());
}

#[test]
fn future_is_blank_after_publish() {
    let mut fb = FrameBuffer::new(12, 6);
    draw_text(&mut fb, 1, 1, "hello world");
    fb.publish(&mut Writes::new()).unwrap();
    assert!(fb.future().cells().iter().all(|&c| c == BLANK));
    assert_eq!(fb.present().row_string(1), " hello world");
}

#[test]
fn text_clipping_at_right_edge_of_top_row() {
    let (w, h) = (80u16, 24u16);
    let mut fb = FrameBuffer::new(w, h);
    draw_text(&mut fb, i32::from(w) - 2, 0, "Pong");

    let mut out = Writes::new();
    fb.publish(&mut out).unwrap();
    assert_eq!(out, vec![(78, 0, 'P'), (79, 0, 'o')]);
    assert!(out.iter().all(|&(x, _, _)| x <= w - 1));
}
