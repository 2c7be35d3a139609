use griddom::{Rect, Rgb};

pub const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
pub const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    /// Right half of a double-width glyph drawn in the cell to the left.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            wide_continuation: false,
        }
    }
}

/// A screen-sized grid of cells. Drawing outside it is silently clipped, so
/// callers can hand it rects that hang off any edge.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(i32::from(self.width), i32::from(self.height))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u16::try_from(y).ok().filter(|y| *y < self.height)?;
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cells that differ from `previous`, with their screen position.
    pub fn diff<'a>(&'a self, previous: &'a Canvas) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = usize::from(self.width).max(1);
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }
}
