//! Core module - pure simulation logic with no I/O dependencies.
//!
//! This module contains the grid store, the generation step rule, and the
//! seed pattern machinery. It is deterministic: the same seed configuration
//! and the same number of steps always produce the same grid.

pub mod grid;
pub mod life;
pub mod seed;
pub mod snapshot;

// Re-export commonly used types
pub use grid::Grid;
pub use life::LifeEngine;
pub use seed::{Pattern, PatternSpec, Placement, SeedConfig};
pub use snapshot::GridSnapshot;
