//! Read-only copy of one generation.
//!
//! A snapshot is taken once per step and serves as the single consistent
//! read source while the live grid is rewritten.

/// Immutable copy of a grid's cells with the same toroidal addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl GridSnapshot {
    pub(crate) fn new(width: u32, height: u32, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell state at the wrapped coordinate.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        let x = x.rem_euclid(self.width as i32) as usize;
        let y = y.rem_euclid(self.height as i32) as usize;
        self.cells[y * (self.width as usize) + x]
    }

    /// Count live cells in the Moore neighborhood of `(x, y)`.
    ///
    /// The 3x3 block centered on the cell, excluding the center itself, with
    /// toroidal wraparound for out-of-range neighbors.
    #[inline]
    pub fn alive_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.get(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }
}
