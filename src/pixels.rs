//! RGBA8 translation of the boolean grid.
//!
//! The boolean grid is canonical; the pixel buffer is a presentation-layer
//! encoding for hosts that consume image data. Alive cells encode as black
//! color channels `(0,0,0)`, dead cells as white `(255,255,255)`. The alpha
//! channel is written opaque once at construction and never touched again.

use crate::core::Grid;
use crate::types::{ALIVE_CHANNEL, BYTES_PER_PIXEL, DEAD_CHANNEL, OPAQUE_ALPHA};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Create an all-dead (white, opaque) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        let mut bytes = vec![DEAD_CHANNEL; len];
        for px in bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[3] = OPAQUE_ALPHA;
        }
        Self {
            width,
            height,
            bytes,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Re-encode the grid's current generation into the color channels.
    pub fn sync_from(&mut self, grid: &Grid) {
        debug_assert_eq!((grid.width(), grid.height()), (self.width, self.height));
        for (cell, px) in grid
            .cells()
            .iter()
            .zip(self.bytes.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            let channel = if *cell { ALIVE_CHANNEL } else { DEAD_CHANNEL };
            px[0] = channel;
            px[1] = channel;
            px[2] = channel;
            // px[3] stays untouched.
        }
    }

    /// The packed RGBA8 buffer, row-major, `width * height * 4` bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The four bytes of one pixel. Coordinates must be in range.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) as usize) * BYTES_PER_PIXEL;
        [
            self.bytes[idx],
            self.bytes[idx + 1],
            self.bytes[idx + 2],
            self.bytes[idx + 3],
        ]
    }
}
