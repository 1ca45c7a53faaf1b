//! Configuration types for gauge rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every section and field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`CanvasConfig`] - Canvas size for layers that do not declare one.
//! - [`ShadowConfig`] - Drop shadow used for `"shadow": true`.
//! - [`TextConfig`] - Default font family.
//!
//! # Example
//!
//! ```
//! # use gaugesmith::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 600.0);
//! assert_eq!(config.text().font(), "Arial");
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use gaugesmith_core::{
    draw::DEFAULT_FONT,
    geometry::Size,
    semantic::{DEFAULT_SHADOW_OFFSET, DEFAULT_SHADOW_SIZE, Shadow},
};
use gaugesmith_parser::{DEFAULT_CANVAS_EDGE, ElaborateConfig};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Shadow configuration section.
    #[serde(default)]
    shadow: ShadowConfig,

    /// Text configuration section.
    #[serde(default)]
    text: TextConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, shadow: ShadowConfig, text: TextConfig) -> Self {
        Self {
            canvas,
            shadow,
            text,
        }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn shadow(&self) -> &ShadowConfig {
        &self.shadow
    }

    pub fn text(&self) -> &TextConfig {
        &self.text
    }

    /// Checks values that deserialize fine but cannot be rendered.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        let canvas = self.canvas;
        if !(canvas.width > 0.0 && canvas.height > 0.0) {
            return Err(format!(
                "canvas size must be positive, found {}x{}",
                canvas.width, canvas.height
            ));
        }
        if self.shadow.size < 0.0 {
            return Err(format!(
                "shadow size must not be negative, found {}",
                self.shadow.size
            ));
        }
        if self.text.font.trim().is_empty() {
            return Err("text font must not be empty".to_string());
        }
        Ok(())
    }

    /// The parser defaults derived from this configuration.
    pub fn elaborate_config(&self) -> ElaborateConfig {
        ElaborateConfig::new(
            self.canvas.size(),
            self.shadow.to_shadow(),
            self.text.font.clone(),
        )
    }
}

/// Canvas size used when neither the layer nor the document declares one.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_EDGE, DEFAULT_CANVAS_EDGE)
    }
}

/// Drop shadow parameters: blur `size` and offset `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    size: f32,
    x: f32,
    y: f32,
}

impl ShadowConfig {
    pub fn new(size: f32, x: f32, y: f32) -> Self {
        Self { size, x, y }
    }

    pub fn to_shadow(&self) -> Shadow {
        Shadow::new(self.size, self.x, self.y)
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_SHADOW_SIZE,
            DEFAULT_SHADOW_OFFSET,
            DEFAULT_SHADOW_OFFSET,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    font: String,
}

impl TextConfig {
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }

    /// Font family for text and tick labels without an explicit font.
    pub fn font(&self) -> &str {
        &self.font
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FONT)
    }
}
