//! Braille SVG - render Unicode Braille text as vector dot cells
//!
//! Each character of the Braille Patterns block (U+2800..=U+28FF) becomes a
//! two-column, three-row cell of dots, laid out left to right.
//!
//! # Example
//!
//! ```rust
//! use braille_svg::render;
//!
//! let rendered = render("⠃");
//! assert!(rendered.svg.contains("<svg"));
//! assert_eq!(rendered.svg.matches("<circle").count(), 2);
//! assert!(rendered.diagnostics.is_empty());
//! ```

pub mod braille;
pub mod config;
pub mod error;
pub mod layout;
pub mod renderer;

pub use braille::{decode, decode_str, encode, is_braille_string, DotSet};
pub use error::{ConfigError, Diagnostic, InvalidCodepoint};
pub use layout::{Document, LayoutConfig};
pub use renderer::{render_svg, SvgConfig};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Output of the render pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// The SVG document
    pub svg: String,
    /// Characters that were not Braille and were drawn as blank cells
    pub diagnostics: Vec<Diagnostic>,
}

/// Render Braille text to SVG with default configuration
pub fn render(input: &str) -> Rendered {
    render_with_config(input, &RenderConfig::default())
}

/// Render Braille text to SVG with custom configuration
///
/// Never fails: characters outside the Braille block are reported in
/// [`Rendered::diagnostics`] and take up a blank cell.
///
/// # Example
///
/// ```rust
/// use braille_svg::{render_with_config, LayoutConfig, RenderConfig};
///
/// let config = RenderConfig::new().with_layout(
///     LayoutConfig::new()
///         .with_dot_color("#2c5aa0")
///         .with_background_color("#f0f8ff"),
/// );
///
/// let rendered = render_with_config("⠙⠪", &config);
/// assert!(rendered.svg.contains(r##"fill="#f0f8ff""##));
/// ```
pub fn render_with_config(input: &str, config: &RenderConfig) -> Rendered {
    let (cells, diagnostics) = decode_str(input);
    if !diagnostics.is_empty() {
        log::debug!("{} non-Braille characters in input", diagnostics.len());
    }

    let document = layout::compute(&cells, &config.layout);
    let svg = render_svg(&document, &config.svg);

    Rendered { svg, diagnostics }
}
