//! Backend trait definitions.
//!
//! Every drawing surface implements [`SdiBackend`]. Widgets dispatch all
//! rendering through this trait boundary and never touch pixels directly.
//!
//! The core methods are required. `draw_line` and `fill_circle` have
//! default implementations built on `fill_rect`, so a minimal backend only
//! needs rectangles to work.

use crate::error::Result;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// Parse "#RRGGBB" or "#RRGGBBAA" into a `Color`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if !s.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    match s.len() {
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Drawing surface trait.
///
/// Coordinates are surface-local pixels with the origin at the top-left
/// corner. Colors with alpha below 255 are composited source-over by
/// backends that support blending.
#[allow(clippy::too_many_arguments)]
pub trait SdiBackend {
    // -----------------------------------------------------------------------
    // Core methods (required)
    // -----------------------------------------------------------------------

    /// Initialize the surface with the given pixel dimensions.
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    /// Reset a rectangle to fully transparent pixels.
    fn clear_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Release backend resources.
    fn shutdown(&mut self) -> Result<()>;

    // -----------------------------------------------------------------------
    // Extended primitives (optional, with defaults)
    // -----------------------------------------------------------------------

    /// Draw a straight line. The default handles axis-aligned lines only.
    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        if y1 == y2 {
            let lx = x1.min(x2);
            let w = (x1 - x2).unsigned_abs();
            self.fill_rect(lx, y1, w.max(1), width as u32, color)?;
        } else if x1 == x2 {
            let ly = y1.min(y2);
            let h = (y1 - y2).unsigned_abs();
            self.fill_rect(x1, ly, width as u32, h.max(1), color)?;
        }
        Ok(())
    }

    /// Draw a filled circle. The default fills the bounding square.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        let r = radius as i32;
        let side = (radius as u32 * 2).max(1);
        self.fill_rect(cx - r, cy - r, side, side, color)
    }
}
