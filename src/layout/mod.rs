//! Layout engine for positioning Braille dots on a canvas
//!
//! Takes decoded dot sets and produces a [`Document`] with absolute dot
//! coordinates and the canvas size.

pub mod config;
pub mod engine;
pub mod types;

pub use config::{LayoutConfig, TRANSPARENT};
pub use engine::{canvas_width, compute, grid_position, place_dots};
pub use types::*;
