//! SVG renderer for laid-out Braille documents

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, SvgBuilder};
