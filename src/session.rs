//! Host integration surface.
//!
//! `LifeSession` owns the engine plus the RGBA buffer it renders into and
//! exposes the four operations a host drives: `initialize`, `step`, `reset`
//! and `read_buffer`. Plain methods, no lifecycle base class - a host's
//! load/start/stop/update hooks become a thin adapter over these.

use crate::core::{LifeEngine, SeedConfig};
use crate::error::ConfigError;
use crate::pixels::PixelBuffer;

pub struct LifeSession {
    engine: LifeEngine,
    pixels: PixelBuffer,
}

impl LifeSession {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let engine = LifeEngine::new(width, height)?;
        let pixels = PixelBuffer::new(width, height);
        Ok(Self { engine, pixels })
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    /// Seed the grid from a declarative table.
    ///
    /// A failed validation leaves both the grid and the pixel buffer in
    /// their prior state.
    pub fn initialize(&mut self, seed: &SeedConfig) -> Result<(), ConfigError> {
        self.engine.initialize(seed)?;
        self.sync();
        Ok(())
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        self.engine.step();
        self.sync();
    }

    /// Blank the grid.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.sync();
    }

    /// Current generation as packed RGBA8 bytes.
    pub fn read_buffer(&self) -> &[u8] {
        self.pixels.bytes()
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    fn sync(&mut self) {
        self.pixels.sync_from(self.engine.grid());
    }
}
