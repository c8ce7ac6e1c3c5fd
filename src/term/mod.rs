//! Terminal front end: framebuffer, renderer, and the grid view.

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{GridView, Viewport};
pub use renderer::TerminalRenderer;
