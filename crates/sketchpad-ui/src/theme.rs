//! Slider color scheme.

use sketchpad_types::backend::{Color, parse_hex_color};
use sketchpad_types::config::ThemeOverrides;
use sketchpad_types::error::{Result, SketchError};

/// Colors used by [`crate::LineWidthSlider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderTheme {
    /// Background band behind the track.
    pub band: Color,
    /// Track centerline.
    pub centerline: Color,
    /// Guide rails above and below the centerline.
    pub guide: Color,
    /// Filled value indicator.
    pub indicator: Color,
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self {
            band: Color::BLACK.with_alpha(51),
            centerline: Color::WHITE,
            guide: Color::WHITE.with_alpha(128),
            indicator: Color::BLACK,
        }
    }
}

impl SliderTheme {
    /// Apply config overrides on top of the default colors.
    pub fn from_overrides(overrides: &ThemeOverrides) -> Result<Self> {
        let mut theme = Self::default();
        apply(&mut theme.band, "band", overrides.band.as_deref())?;
        apply(&mut theme.centerline, "centerline", overrides.centerline.as_deref())?;
        apply(&mut theme.guide, "guide", overrides.guide.as_deref())?;
        apply(&mut theme.indicator, "indicator", overrides.indicator.as_deref())?;
        Ok(theme)
    }
}

fn apply(slot: &mut Color, key: &str, value: Option<&str>) -> Result<()> {
    if let Some(hex) = value {
        *slot = parse_hex_color(hex)
            .ok_or_else(|| SketchError::Config(format!("theme.{key}: invalid color '{hex}'")))?;
    }
    Ok(())
}
