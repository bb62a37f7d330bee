//! Error and diagnostic types

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Character range in the input text
pub type Span = std::ops::Range<usize>;

/// A character outside the Braille Patterns block
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid Braille character {ch:?} (U+{code:04X})", code = code_point(.ch))]
pub struct InvalidCodepoint {
    pub ch: char,
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

/// A recoverable problem found while decoding input text.
///
/// The offending character still occupies a blank cell in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Character position in the input (not a byte offset)
    pub index: usize,
    pub error: InvalidCodepoint,
}

impl Diagnostic {
    pub fn span(&self) -> Span {
        self.index..self.index + 1
    }

    /// Format the diagnostic with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, self.index)
            .with_message(self.error.to_string())
            .with_label(
                Label::new((filename, self.span()))
                    .with_message("rendered as a blank cell")
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "character {}: {}", self.index, self.error)
    }
}

/// Errors that can occur when loading or checking configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {field}: {value} (must be a positive number)")]
    InvalidDimension { field: &'static str, value: f64 },
}
