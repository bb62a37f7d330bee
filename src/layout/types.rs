//! Core types for the layout engine

/// A 2D point in canvas coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One rendered dot
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub color: String,
}

/// Dots placed by the engine plus the cursor after the last cell
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub dots: Vec<Dot>,
    /// Cursor x after advancing past every cell
    pub cursor: f64,
}

/// Everything the renderer needs: canvas size, optional background and dots
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    /// Full-canvas background fill, beneath all dots
    pub background: Option<String>,
    /// Dots in cell order, ascending dot number within a cell
    pub dots: Vec<Dot>,
}
