//! Conway's Game of Life on a toroidal grid.
//!
//! The library is split the same way the binary consumes it:
//!
//! - [`core`]: the automaton itself (grid store, step rule, seed patterns).
//!   Pure and deterministic, no I/O.
//! - [`pixels`]: translation of the boolean grid into an RGBA8 byte buffer
//!   for hosts that consume pixel data.
//! - [`session`]: the host integration surface (`initialize`, `step`,
//!   `reset`, `read_buffer`) as plain methods on an owning type.
//! - [`clock`]: explicit fixed-interval step scheduler; the core carries no
//!   clock state of its own.
//! - [`term`]: terminal framebuffer renderer used by the default binary.

pub mod clock;
pub mod core;
pub mod error;
pub mod pixels;
pub mod session;
pub mod term;
pub mod types;
