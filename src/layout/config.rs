//! Configuration for the layout engine

use crate::error::ConfigError;

/// Background color value that suppresses the background rectangle
pub const TRANSPARENT: &str = "transparent";

/// Grid geometry and colors for laying out Braille cells
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Radius of each dot
    pub dot_radius: f64,

    /// Width of one dot column (a cell is two columns wide)
    pub cell_width: f64,

    /// Height of one dot row (a cell is three rows tall)
    pub cell_height: f64,

    /// Gap between neighbouring cells
    pub char_spacing: f64,

    /// Fill color for dots
    pub dot_color: String,

    /// Fixed canvas width; computed from the text when `None`
    pub canvas_width: Option<f64>,

    /// Canvas height
    pub canvas_height: f64,

    /// Background fill, or `"transparent"` for none
    pub background_color: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            dot_radius: 3.0,
            cell_width: 10.0,
            cell_height: 10.0,
            char_spacing: 5.0,
            dot_color: "black".to_string(),
            canvas_width: None,
            canvas_height: 40.0,
            background_color: TRANSPARENT.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    /// Set the column width and row height of a cell
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    pub fn with_char_spacing(mut self, spacing: f64) -> Self {
        self.char_spacing = spacing;
        self
    }

    pub fn with_dot_color(mut self, color: impl Into<String>) -> Self {
        self.dot_color = color.into();
        self
    }

    /// Fix the canvas width instead of computing it from the text
    pub fn with_canvas_width(mut self, width: f64) -> Self {
        self.canvas_width = Some(width);
        self
    }

    pub fn with_canvas_height(mut self, height: f64) -> Self {
        self.canvas_height = height;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Horizontal distance between the origins of consecutive cells
    pub fn advance(&self) -> f64 {
        2.0 * self.cell_width + self.char_spacing
    }

    /// Background fill, or `None` when transparent
    pub fn background(&self) -> Option<&str> {
        if self.background_color.eq_ignore_ascii_case(TRANSPARENT) {
            None
        } else {
            Some(&self.background_color)
        }
    }

    /// Reject non-finite or non-positive dimensions.
    ///
    /// The layout engine does not call this; values it is given are used
    /// as-is. Front ends that take user input check here first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("dot_radius", Some(self.dot_radius)),
            ("cell_width", Some(self.cell_width)),
            ("cell_height", Some(self.cell_height)),
            ("canvas_width", self.canvas_width),
            ("canvas_height", Some(self.canvas_height)),
        ];
        for (field, value) in positive {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConfigError::InvalidDimension { field, value });
                }
            }
        }
        // Cells may touch
        if !self.char_spacing.is_finite() || self.char_spacing < 0.0 {
            return Err(ConfigError::InvalidDimension {
                field: "char_spacing",
                value: self.char_spacing,
            });
        }
        Ok(())
    }
}
