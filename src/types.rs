//! Core constants shared across the application.
//! This module contains pure data with no external dependencies.

/// Default grid dimensions (the reference deployment runs 200x200).
pub const GRID_WIDTH: u32 = 200;
pub const GRID_HEIGHT: u32 = 200;

/// Default simulation cadence: one generation per 100ms (10 steps/second).
pub const STEP_INTERVAL_MS: u64 = 100;

/// RGBA8 pixel encoding of cell state.
///
/// A cell is alive when its color channels are all `ALIVE_CHANNEL` and dead
/// when they are all `DEAD_CHANNEL`. The alpha channel is opaque and never
/// touched by the simulation.
pub const ALIVE_CHANNEL: u8 = 0;
pub const DEAD_CHANNEL: u8 = 255;
pub const OPAQUE_ALPHA: u8 = 255;
pub const BYTES_PER_PIXEL: usize = 4;
