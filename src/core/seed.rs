//! Seed patterns and placements.
//!
//! A seed configuration is a declarative table: named stencils plus the grid
//! coordinates they are stamped at. It is consumed once by
//! [`LifeEngine::initialize`](crate::core::LifeEngine::initialize) and not
//! retained afterwards. The whole table is validated before any cell is
//! written, so a malformed seed never corrupts a running grid.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Stencil marker for a live cell. Space and `.` both mean dead, which keeps
/// hand-written JSON rows readable.
const ALIVE_MARKER: char = '*';

/// A named stencil as written in configuration: declared size plus marker
/// rows. Parsed and validated into a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rows: Vec<String>,
}

impl PatternSpec {
    pub fn new(name: &str, width: u32, height: u32, rows: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// A validated rectangular stencil of alive/dead cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Pattern {
    /// Parse a spec, rejecting stencils whose marker rows do not match the
    /// declared size and rows containing unknown markers.
    pub fn parse(spec: &PatternSpec) -> Result<Self, ConfigError> {
        let expected = (spec.width as usize) * (spec.height as usize);
        let found: usize = spec.rows.iter().map(|r| r.chars().count()).sum();
        let rows_match = spec.rows.len() == spec.height as usize
            && spec
                .rows
                .iter()
                .all(|r| r.chars().count() == spec.width as usize);
        if !rows_match {
            return Err(ConfigError::PatternSizeMismatch {
                name: spec.name.clone(),
                expected,
                found,
            });
        }

        let mut cells = Vec::with_capacity(expected);
        for row in &spec.rows {
            for ch in row.chars() {
                match ch {
                    ALIVE_MARKER => cells.push(true),
                    ' ' | '.' => cells.push(false),
                    other => {
                        return Err(ConfigError::InvalidMarker {
                            name: spec.name.clone(),
                            marker: other,
                        });
                    }
                }
            }
        }

        Ok(Self {
            name: spec.name.clone(),
            width: spec.width,
            height: spec.height,
            cells,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Stencil state at `(px, py)`; coordinates must be inside the stencil.
    pub fn is_alive(&self, px: u32, py: u32) -> bool {
        self.cells[(py * self.width + px) as usize]
    }
}

/// One stamped instance of a pattern. The pattern is centered on `(x, y)`
/// using truncating integer division of its size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pattern: String,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(pattern: &str, x: i32, y: i32) -> Self {
        Self {
            pattern: pattern.to_string(),
            x,
            y,
        }
    }
}

/// Declarative seed table: stencils plus where to stamp them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub patterns: Vec<PatternSpec>,
    pub placements: Vec<Placement>,
}

impl SeedConfig {
    /// Load a seed table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate the whole table and resolve it into absolute live-cell
    /// coordinates (unwrapped; callers normalize via the grid).
    ///
    /// Overlapping placements may emit the same coordinate twice; stamping is
    /// an idempotent "set alive", so duplicates are harmless.
    pub fn live_cells(&self) -> Result<Vec<(i32, i32)>, ConfigError> {
        let mut patterns: HashMap<&str, Pattern> = HashMap::new();
        for spec in &self.patterns {
            let pattern = Pattern::parse(spec)?;
            if patterns.insert(&spec.name, pattern).is_some() {
                return Err(ConfigError::DuplicatePattern {
                    name: spec.name.clone(),
                });
            }
        }

        let mut cells = Vec::new();
        for placement in &self.placements {
            let pattern = patterns.get(placement.pattern.as_str()).ok_or_else(|| {
                ConfigError::UnknownPattern {
                    name: placement.pattern.clone(),
                }
            })?;
            let half_w = (pattern.width() / 2) as i32;
            let half_h = (pattern.height() / 2) as i32;
            for py in 0..pattern.height() {
                for px in 0..pattern.width() {
                    if pattern.is_alive(px, py) {
                        cells.push((
                            placement.x + px as i32 - half_w,
                            placement.y + py as i32 - half_h,
                        ));
                    }
                }
            }
        }
        Ok(cells)
    }

    /// The reference deployment's seed table for a 200x200 grid.
    pub fn reference() -> Self {
        Self {
            patterns: vec![
                PatternSpec::new("blinker", 3, 1, &["***"]),
                PatternSpec::new(
                    "glider",
                    3,
                    3,
                    &[
                        "  *", //
                        "* *", //
                        " **",
                    ],
                ),
                PatternSpec::new(
                    "cloverleaf",
                    9,
                    11,
                    &[
                        "   * *   ",
                        " *** *** ",
                        "*   *   *",
                        "* *   * *",
                        " ** * ** ",
                        "         ",
                        " ** * ** ",
                        "* *   * *",
                        "*   *   *",
                        " *** *** ",
                        "   * *   ",
                    ],
                ),
                PatternSpec::new(
                    "hammerhead",
                    18,
                    16,
                    &[
                        "*****             ",
                        "*    *       **   ",
                        "*           ** ***",
                        " *         ** ****",
                        "   **   ** **  ** ",
                        "     *    *  *    ",
                        "      * * * *     ",
                        "       *          ",
                        "       *          ",
                        "      * * * *     ",
                        "     *    *  *    ",
                        "   **   ** **  ** ",
                        " *         ** ****",
                        "*           ** ***",
                        "*    *       **   ",
                        "*****             ",
                    ],
                ),
                PatternSpec::new(
                    "zdr",
                    8,
                    12,
                    &[
                        " **  ** ",
                        "   **   ",
                        "   **   ",
                        "* *  * *",
                        "*      *",
                        "        ",
                        "*      *",
                        " **  ** ",
                        "  ****  ",
                        "        ",
                        "   **   ",
                        "   **   ",
                    ],
                ),
            ],
            placements: vec![
                Placement::new("blinker", 10, 10),
                Placement::new("blinker", 20, 20),
                Placement::new("blinker", 10, 20),
                Placement::new("blinker", 20, 10),
                Placement::new("glider", 30, 30),
                Placement::new("glider", 20, 50),
                Placement::new("glider", 10, 5),
                Placement::new("glider", 0, 0),
                Placement::new("glider", 80, 30),
                Placement::new("glider", 40, 90),
                Placement::new("glider", 90, 10),
                Placement::new("glider", 90, 50),
                Placement::new("cloverleaf", 100, 100),
                Placement::new("cloverleaf", 130, 100),
                Placement::new("hammerhead", 150, 150),
                Placement::new("hammerhead", 155, 170),
                Placement::new("hammerhead", 160, 190),
                Placement::new("zdr", 30, 150),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_seed_validates() {
        let cells = SeedConfig::reference().live_cells().unwrap();
        assert!(!cells.is_empty());
    }

    #[test]
    fn test_pattern_rejects_row_count_mismatch() {
        let spec = PatternSpec::new("bad", 3, 2, &["***"]);
        assert!(matches!(
            Pattern::parse(&spec),
            Err(ConfigError::PatternSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_pattern_rejects_row_width_mismatch() {
        let spec = PatternSpec::new("bad", 3, 2, &["***", "**"]);
        assert!(matches!(
            Pattern::parse(&spec),
            Err(ConfigError::PatternSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_pattern_rejects_unknown_marker() {
        let spec = PatternSpec::new("bad", 2, 1, &["*x"]);
        assert!(matches!(
            Pattern::parse(&spec),
            Err(ConfigError::InvalidMarker { marker: 'x', .. })
        ));
    }

    #[test]
    fn test_dot_marker_means_dead() {
        let spec = PatternSpec::new("dots", 3, 1, &["*.*"]);
        let pattern = Pattern::parse(&spec).unwrap();
        assert!(pattern.is_alive(0, 0));
        assert!(!pattern.is_alive(1, 0));
        assert!(pattern.is_alive(2, 0));
    }
}
