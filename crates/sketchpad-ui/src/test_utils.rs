//! Shared test utilities for sketchpad-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion.

use sketchpad_types::backend::{Color, SdiBackend};
use sketchpad_types::error::{Result, SketchError};

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    ClearRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    },
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawLine {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        radius: u16,
        color: Color,
    },
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    pub initialized: Option<(u32, u32)>,
    fail_init: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            initialized: None,
            fail_init: false,
        }
    }

    /// A backend whose `init` always fails.
    pub fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Self::new()
        }
    }

    /// Return only the `FillCircle` entries.
    pub fn circle_calls(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { .. }))
            .collect()
    }

    /// Count of `DrawLine` calls.
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawLine { .. }))
            .count()
    }

    /// The most recent `FillCircle` as `(cx, cy, radius)`.
    pub fn last_circle(&self) -> Option<(i32, i32, u16)> {
        self.calls.iter().rev().find_map(|c| {
            if let DrawCall::FillCircle { cx, cy, radius, .. } = c {
                Some((*cx, *cy, *radius))
            } else {
                None
            }
        })
    }
}

impl SdiBackend for MockBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        if self.fail_init {
            return Err(SketchError::Backend("no 2d context".into()));
        }
        self.initialized = Some((width, height));
        Ok(())
    }

    fn clear_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.calls.push(DrawCall::ClearRect { x, y, w, h });
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
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
        self.calls.push(DrawCall::DrawLine {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
        Ok(())
    }
}
