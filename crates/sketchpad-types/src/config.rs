//! Host configuration, loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the defaults of the
//! stock line-width slider.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Page-space offset of a widget's canvas.
///
/// Pointer events arrive in page coordinates and are translated into
/// widget-local coordinates by subtracting this offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetPosition {
    pub x: i32,
    pub y: i32,
}

impl WidgetPosition {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Optional color overrides as `#RRGGBB` / `#RRGGBBAA` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    /// Background band behind the track.
    pub band: Option<String>,
    /// Track centerline.
    pub centerline: Option<String>,
    /// Guide rails above and below the centerline.
    pub guide: Option<String>,
    /// Value indicator.
    pub indicator: Option<String>,
}

/// Top-level configuration for a line-width slider host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Identifier of the canvas the slider draws into.
    pub canvas_id: String,
    /// Line width selected at startup.
    pub initial_value: u32,
    /// Indicator x position at startup, in canvas pixels.
    pub initial_position: i32,
    /// Where the canvas sits on the page.
    pub position: WidgetPosition,
    /// Color overrides.
    pub theme: ThemeOverrides,
    /// Destination for rendered frames.
    pub output_path: PathBuf,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_id: "lineWidthSlider".to_string(),
            initial_value: 5,
            initial_position: 10,
            position: WidgetPosition::ORIGIN,
            theme: ThemeOverrides::default(),
            output_path: PathBuf::from("line_width.png"),
        }
    }
}

impl SketchConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
