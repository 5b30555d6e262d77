//! Software framebuffer backend for sketchpad.
//!
//! Implements `SdiBackend` over an in-memory RGBA8 buffer so widgets can be
//! rendered headless (tests, screenshots). Colors are composited
//! source-over with straight alpha; `clear_rect` overwrites.

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use sketchpad_types::backend::{Color, SdiBackend};
use sketchpad_types::error::{Result, SketchError};

/// In-memory RGBA8 drawing surface.
#[derive(Debug, Default)]
pub struct RasterBackend {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterBackend {
    /// Create an empty backend. Call `init` before drawing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of a single pixel, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.index(x, y)?;
        let p = &self.pixels[i..i + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Encode the surface as an RGBA PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        if self.pixels.is_empty() {
            return Err(SketchError::Backend("surface not initialized".into()));
        }
        let path = path.as_ref();
        let file = fs::File::create(path)?;
        let writer = BufWriter::new(file);
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| SketchError::Backend(format!("png header: {e}")))?;
        writer
            .write_image_data(&self.pixels)
            .map_err(|e| SketchError::Backend(format!("png data: {e}")))?;
        log::info!("Wrote {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Clip a rectangle to the surface, returning `(x0, y0, x1, y1)` with
    /// exclusive upper bounds, or `None` if nothing remains.
    fn clip(&self, x: i32, y: i32, w: u32, h: u32) -> Option<(i32, i32, i32, i32)> {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x as i64 + w as i64).min(self.width as i64) as i32;
        let y1 = (y as i64 + h as i64).min(self.height as i64) as i32;
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn blend(&mut self, x: i32, y: i32, color: Color) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let dst = &mut self.pixels[i..i + 4];
        match color.a {
            0 => {},
            255 => dst.copy_from_slice(&[color.r, color.g, color.b, 255]),
            sa => {
                let sa = sa as u32;
                let da = dst[3] as u32;
                // out_a = sa + da * (1 - sa), all in 0..=255 fixed point.
                let out_a = sa + da * (255 - sa) / 255;
                let mix = |s: u8, d: u8| -> u8 {
                    let num = s as u32 * sa + d as u32 * da * (255 - sa) / 255;
                    (num / out_a) as u8
                };
                dst[0] = mix(color.r, dst[0]);
                dst[1] = mix(color.g, dst[1]);
                dst[2] = mix(color.b, dst[2]);
                dst[3] = out_a as u8;
            },
        }
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        for x in x0..=x1 {
            self.blend(x, y, color);
        }
    }
}

impl SdiBackend for RasterBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| SketchError::Backend(format!("surface too large: {width}x{height}")))?;
        self.width = width;
        self.height = height;
        self.pixels = vec![0; len];
        log::info!("Raster backend initialized: {width}x{height}");
        Ok(())
    }

    fn clear_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        if let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) {
            for row in y0..y1 {
                // Row range is in bounds after clipping.
                let start = (row as usize * self.width as usize + x0 as usize) * 4;
                let end = start + (x1 - x0) as usize * 4;
                self.pixels[start..end].fill(0);
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        if let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) {
            for row in y0..y1 {
                self.hline(x0, x1 - 1, row, color);
            }
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
        log::info!("Raster backend shut down");
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        let width = width.max(1) as i32;
        if y1 == y2 || x1 == x2 {
            // Axis-aligned: one rect, both endpoints inclusive.
            let (lx, rx) = (x1.min(x2), x1.max(x2));
            let (ty, by) = (y1.min(y2), y1.max(y2));
            let (w, h) = if y1 == y2 {
                (rx - lx + 1, width)
            } else {
                (width, by - ty + 1)
            };
            return self.fill_rect(lx, ty, w as u32, h as u32, color);
        }

        // Bresenham; thick lines stamp a square brush per step.
        let half = width / 2;
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            if width == 1 {
                self.blend(x, y, color);
            } else {
                self.fill_rect(x - half, y - half, width as u32, width as u32, color)?;
            }
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        let r = radius as i32;
        let r2 = r * r;
        for dy in -r..=r {
            // Widest half-span with dx^2 + dy^2 <= r^2.
            let mut half = ((r2 - dy * dy) as f64).sqrt() as i32;
            while half * half + dy * dy > r2 {
                half -= 1;
            }
            self.hline(cx - half, cx + half, cy + dy, color);
        }
        Ok(())
    }
}
