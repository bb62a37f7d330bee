//! TOML configuration files
//!
//! ```toml
//! [layout]
//! dot_radius = 4
//! cell_width = 12
//! cell_height = 12
//! char_spacing = 8
//! dot_color = "#2c5aa0"
//! background_color = "#f0f8ff"
//!
//! [svg]
//! standalone = true
//! ```
//!
//! Every key is optional. The camelCase spellings (`dotRadius`,
//! `svgWidth`, ...) are accepted too.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::LayoutConfig;
use crate::renderer::SvgConfig;
use crate::RenderConfig;

/// TOML structure for deserializing configuration files
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlConfig {
    layout: TomlLayout,
    svg: TomlSvg,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlLayout {
    #[serde(alias = "dotRadius")]
    dot_radius: Option<f64>,
    #[serde(alias = "cellWidth")]
    cell_width: Option<f64>,
    #[serde(alias = "cellHeight")]
    cell_height: Option<f64>,
    #[serde(alias = "charSpacing")]
    char_spacing: Option<f64>,
    #[serde(alias = "dotColor")]
    dot_color: Option<String>,
    #[serde(alias = "canvasWidth", alias = "svgWidth")]
    canvas_width: Option<f64>,
    #[serde(alias = "canvasHeight", alias = "svgHeight")]
    canvas_height: Option<f64>,
    #[serde(alias = "backgroundColor")]
    background_color: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlSvg {
    standalone: Option<bool>,
    pretty_print: Option<bool>,
}

impl TomlLayout {
    fn apply(self, mut config: LayoutConfig) -> LayoutConfig {
        if let Some(v) = self.dot_radius {
            config.dot_radius = v;
        }
        if let Some(v) = self.cell_width {
            config.cell_width = v;
        }
        if let Some(v) = self.cell_height {
            config.cell_height = v;
        }
        if let Some(v) = self.char_spacing {
            config.char_spacing = v;
        }
        if let Some(v) = self.dot_color {
            config.dot_color = v;
        }
        if self.canvas_width.is_some() {
            config.canvas_width = self.canvas_width;
        }
        if let Some(v) = self.canvas_height {
            config.canvas_height = v;
        }
        if let Some(v) = self.background_color {
            config.background_color = v;
        }
        config
    }
}

impl TomlSvg {
    fn apply(self, mut config: SvgConfig) -> SvgConfig {
        if let Some(v) = self.standalone {
            config.standalone = v;
        }
        if let Some(v) = self.pretty_print {
            config.pretty_print = v;
        }
        config
    }
}

impl RenderConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string.
    ///
    /// Missing keys keep their defaults; the resulting layout is checked
    /// with [`LayoutConfig::validate`].
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        let config = RenderConfig {
            layout: parsed.layout.apply(LayoutConfig::default()),
            svg: parsed.svg.apply(SvgConfig::default()),
        };
        config.layout.validate()?;
        Ok(config)
    }
}
