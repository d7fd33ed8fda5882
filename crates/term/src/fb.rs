//! Character grids and the present/future double buffer.
//!
//! Coordinates are 0-based `(x = column, y = row)`. Writes outside the grid
//! are rejected, so drawing code can stamp shapes that straddle an edge.

use anyhow::Result;

use crate::types::BLANK;

/// Output collaborator: place one glyph at a screen cell.
pub trait CellSink {
    fn put(&mut self, x: u16, y: u16, ch: char) -> Result<()>;
}

/// Recording sink, handy for tests and for counting writes.
impl CellSink for Vec<(u16, u16, char)> {
    fn put(&mut self, x: u16, y: u16, ch: char) -> Result<()> {
        self.push((x, y, ch));
        Ok(())
    }
}

/// 2D grid of character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Returns `false` (and writes nothing) when `(x, y)` is off the grid.
    pub fn set(&mut self, x: u16, y: u16, ch: char) -> bool {
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// One row as a `String`, mainly for assertions.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .collect()
    }
}

/// Double buffer: `present` mirrors what is on screen, `future` is the frame
/// being drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    present: Grid,
    future: Grid,
}

impl FrameBuffer {
    /// Both grids start blank.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            width > 0 && height > 0,
            "frame buffer needs a non-empty grid, got {width}x{height}"
        );
        Self {
            present: Grid::new(width, height),
            future: Grid::new(width, height),
        }
    }

    pub fn width(&self) -> u16 {
        self.future.width()
    }

    pub fn height(&self) -> u16 {
        self.future.height()
    }

    pub fn present(&self) -> &Grid {
        &self.present
    }

    pub fn future(&self) -> &Grid {
        &self.future
    }

    /// Write into the future grid. Off-grid writes are rejected.
    pub fn write_cell(&mut self, x: u16, y: u16, ch: char) -> bool {
        self.future.set(x, y, ch)
    }

    /// Send every cell where `future` differs from `present` to `sink`, make
    /// `future` the new `present`, then blank `future`.
    ///
    /// Returns the number of cells written.
    pub fn publish<S: CellSink + ?Sized>(&mut self, sink: &mut S) -> Result<usize> {
        let w = self.width();
        let mut written = 0;

        for (i, (now, next)) in self
            .present
            .cells
            .iter()
            .zip(self.future.cells.iter())
            .enumerate()
        {
            if now == next {
                continue;
            }
            let x = (i % w as usize) as u16;
            let y = (i / w as usize) as u16;
            sink.put(x, y, *next)?;
            written += 1;
        }

        // Swap instead of copying; the old present is blanked and reused.
        std::mem::swap(&mut self.present, &mut self.future);
        self.future.clear();
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grids_are_blank() {
        let fb = FrameBuffer::new(4, 3);
        assert!(fb.present().cells().iter().all(|&c| c == BLANK));
        assert!(fb.future().cells().iter().all(|&c| c == BLANK));
        assert_eq!(fb.future().cells().len(), 12);
    }

    #[test]
    #[should_panic]
    fn zero_sized_buffer_panics() {
        let _ = FrameBuffer::new(0, 10);
    }

    #[test]
    fn write_cell_rejects_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 3);
        assert!(fb.write_cell(3, 2, 'x'));
        assert!(!fb.write_cell(4, 0, 'x'));
        assert!(!fb.write_cell(0, 3, 'x'));
        assert_eq!(fb.future().get(3, 2), Some('x'));
        assert_eq!(fb.future().get(4, 0), None);
    }

    #[test]
    fn write_cell_at_origin_is_not_shifted() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.write_cell(0, 0, 'a');
        assert_eq!(fb.future().get(0, 0), Some('a'));
        assert_eq!(fb.future().get(1, 1), Some(BLANK));
    }

    #[test]
    fn publish_writes_only_changed_cells() {
        let mut fb = FrameBuffer::new(5, 2);
        fb.write_cell(1, 0, 'A');
        fb.write_cell(4, 1, 'B');

        let mut out: Vec<(u16, u16, char)> = Vec::new();
        assert_eq!(fb.publish(&mut out).unwrap(), 2);
        assert_eq!(out, vec![(1, 0, 'A'), (4, 1, 'B')]);
        assert_eq!(fb.present().get(1, 0), Some('A'));
    }

    #[test]
    fn publish_blanks_future() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.write_cell(1, 1, '*');
        fb.publish(&mut Vec::<(u16, u16, char)>::new()).unwrap();
        assert!(fb.future().cells().iter().all(|&c| c == BLANK));
    }

    #[test]
    fn unchanged_frame_publishes_nothing() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.write_cell(0, 0, 'x');
        fb.publish(&mut Vec::<(u16, u16, char)>::new()).unwrap();

        fb.write_cell(0, 0, 'x');
        let mut out: Vec<(u16, u16, char)> = Vec::new();
        assert_eq!(fb.publish(&mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn vanished_glyph_is_erased() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.write_cell(2, 0, 'x');
        fb.publish(&mut Vec::<(u16, u16, char)>::new()).unwrap();

        let mut out: Vec<(u16, u16, char)> = Vec::new();
        fb.publish(&mut out).unwrap();
        assert_eq!(out, vec![(2, 0, BLANK)]);
        assert_eq!(fb.present().get(2, 0), Some(BLANK));
    }

    #[test]
    fn row_string_reads_back() {
        let mut grid = Grid::new(4, 1);
        grid.set(1, 0, 'o');
        grid.set(2, 0, 'k');
        assert_eq!(grid.row_string(0), " ok ");
    }
}
