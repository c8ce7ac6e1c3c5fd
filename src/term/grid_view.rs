//! GridView: maps the life grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Two grid rows are packed into each terminal row using the upper-half-block
//! glyph, which roughly squares up the usual terminal glyph aspect ratio.

use crate::core::Grid;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HALF_BLOCK: char = '▀';

pub struct GridView {
    alive: Rgb,
    dead: Rgb,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            alive: Rgb::new(120, 220, 140),
            dead: Rgb::new(16, 16, 22),
        }
    }
}

impl GridView {
    pub fn new(alive: Rgb, dead: Rgb) -> Self {
        Self { alive, dead }
    }

    /// Render the grid plus a one-line status bar into a framebuffer.
    ///
    /// The visible region is the grid's top-left corner, clipped to the
    /// viewport and centered; a grid larger than the terminal is cropped
    /// rather than scaled.
    pub fn render(&self, grid: &Grid, generation: u64, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::new(self.dead, self.dead).into_cell(' '));

        let area_h = viewport.height.saturating_sub(1);
        let grid_rows = (grid.height() as u16).div_ceil(2);
        let vis_w = (grid.width() as u16).min(viewport.width);
        let vis_h = grid_rows.min(area_h);
        let start_x = viewport.width.saturating_sub(vis_w) / 2;
        let start_y = area_h.saturating_sub(vis_h) / 2;

        for ty in 0..vis_h {
            let gy = (ty as i32) * 2;
            for tx in 0..vis_w {
                let gx = tx as i32;
                let top = self.cell_color(grid, gx, gy);
                let bottom = self.cell_color(grid, gx, gy + 1);
                fb.put_char(
                    start_x + tx,
                    start_y + ty,
                    HALF_BLOCK,
                    CellStyle::new(top, bottom),
                );
            }
        }

        self.draw_status(&mut fb, grid, generation, paused, viewport);
        fb
    }

    fn cell_color(&self, grid: &Grid, x: i32, y: i32) -> Rgb {
        // The row below the last grid row (odd heights) shows as dead.
        if y >= grid.height() as i32 {
            return self.dead;
        }
        if grid.get(x, y) {
            self.alive
        } else {
            self.dead
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        grid: &Grid,
        generation: u64,
        paused: bool,
        viewport: Viewport,
    ) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let y = viewport.height.saturating_sub(1);
        let state = if paused { "PAUSED" } else { "RUN" };
        let line = format!(
            " {}  GEN {}  POP {}  {}x{}  [space] pause  [r] seed  [c] clear  [q] quit",
            state,
            generation,
            grid.population(),
            grid.width(),
            grid.height(),
        );
        // Blank the bar first so stale text never survives a diff redraw.
        for x in 0..viewport.width {
            fb.put_char(x, y, ' ', style);
        }
        fb.put_str(0, y, &line, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_marks_live_cells_with_alive_color() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, true);

        let view = GridView::default();
        let fb = view.render(&grid, 0, false, Viewport::new(10, 10));

        // 4x4 grid renders as 4x2 half-block cells centered in a 10x9 area.
        let start_x = (10 - 4) / 2;
        let start_y = (9 - 2) / 2;
        let cell = fb.get(start_x, start_y).unwrap();
        assert_eq!(cell.ch, '▀');
        assert_eq!(cell.style.fg, GridView::default().alive);
        assert_eq!(cell.style.bg, GridView::default().dead);
    }

    #[test]
    fn render_status_line_reports_generation_and_population() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(1, 1, true);
        grid.set(2, 2, true);

        let view = GridView::default();
        let fb = view.render(&grid, 7, true, Viewport::new(60, 10));

        let mut line = String::new();
        for x in 0..60 {
            line.push(fb.get(x, 9).unwrap().ch);
        }
        assert!(line.contains("PAUSED"));
        assert!(line.contains("GEN 7"));
        assert!(line.contains("POP 2"));
    }
}
