//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Whether to prepend an XML declaration
    pub standalone: bool,

    /// Whether to put each element on its own indented line
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
