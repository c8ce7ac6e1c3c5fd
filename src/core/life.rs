//! Simulation engine - advances the grid one generation at a time.
//!
//! The step rule is standard Conway (B3/S23): a live cell with two or three
//! live neighbors survives, a dead cell with exactly three is born, every
//! other cell is dead in the next generation. Each step reads from a single
//! snapshot of the prior generation while writing into the live grid, so the
//! result is independent of iteration order.

use crate::core::{Grid, SeedConfig};
use crate::error::ConfigError;

pub struct LifeEngine {
    grid: Grid,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine over a blank grid of the given dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for hosts that stamp cells directly (tests,
    /// interactive editing).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Generations advanced since the last `initialize`/`reset`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the grid by exactly one generation.
    pub fn step(&mut self) {
        let prior = self.grid.snapshot();
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let alive = prior.get(x, y);
                let neighbors = prior.alive_neighbors(x, y);
                let next = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                self.grid.set(x, y, next);
            }
        }
        self.generation += 1;
    }

    /// Blank the grid and stamp the seed table's placements.
    ///
    /// The table is validated in full before the first write; on error the
    /// grid keeps its prior state.
    pub fn initialize(&mut self, seed: &SeedConfig) -> Result<(), ConfigError> {
        let cells = seed.live_cells()?;
        self.grid.fill_all(false);
        for (x, y) in cells {
            self.grid.set(x, y, true);
        }
        self.generation = 0;
        Ok(())
    }

    /// Blank the grid.
    pub fn reset(&mut self) {
        self.grid.fill_all(false);
        self.generation = 0;
    }
}
