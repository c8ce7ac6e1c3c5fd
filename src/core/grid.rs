//! Grid module - the authoritative current generation.
//!
//! The grid is a fixed-size toroidal field of boolean cells stored in a flat
//! row-major vector for cache locality. Addressing wraps: any `(x, y)` pair,
//! including negative coordinates, maps to exactly one cell, so `get`/`set`
//! are total functions and need no out-of-bounds handling.

use crate::core::snapshot::GridSnapshot;
use crate::error::ConfigError;

/// Toroidal field of cells. `true` = alive, `false` = dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Flat array of cells, row-major order (y * width + x).
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Dimensions are fixed for the grid's lifetime; zero dimensions are
    /// rejected eagerly rather than deferred to the first access.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Calculate the flat index for a coordinate, wrapping both axes.
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        let x = x.rem_euclid(self.width as i32) as usize;
        let y = y.rem_euclid(self.height as i32) as usize;
        y * (self.width as usize) + x
    }

    /// Cell state at the wrapped coordinate.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Write cell state at the wrapped coordinate.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Set every cell to the given state in one pass.
    pub fn fill_all(&mut self, alive: bool) {
        self.cells.fill(alive);
    }

    /// Immutable copy of the current generation.
    ///
    /// The simulation engine reads neighbor counts from a snapshot while
    /// writing the next generation into the live grid, so updates within one
    /// step never leak into each other.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.width, self.height, self.cells.clone())
    }

    /// Raw cell slice in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
