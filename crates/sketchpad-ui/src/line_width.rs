//! Line-width slider widget.
//!
//! A fixed 250x120 canvas with a horizontal track. Clicking or dragging
//! along the track picks a line width in `1..=77`; the indicator is a
//! filled circle whose diameter previews the chosen width. The indicator
//! stays where it was placed at construction.

use sketchpad_types::backend::SdiBackend;
use sketchpad_types::config::WidgetPosition;
use sketchpad_types::error::Result;
use sketchpad_types::input::InputEvent;

use crate::canvas::CanvasWidget;
use crate::listeners::ListenerId;
use crate::theme::SliderTheme;
use crate::widget::Widget;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 250;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 120;
/// Height of the translucent background band.
pub const BAND_HEIGHT: u32 = 76;
/// Y of the track centerline (and of the indicator center).
pub const TRACK_Y: i32 = 38;
/// Y of the upper guide rail.
pub const GUIDE_TOP_Y: i32 = 19;
/// Y of the lower guide rail.
pub const GUIDE_BOTTOM_Y: i32 = 57;
/// Leftmost track pixel.
pub const TRACK_START_X: i32 = 1;
/// Rightmost track pixel.
pub const TRACK_END_X: i32 = 249;
/// Pointer x values in `0..=POINTER_RANGE` are accepted.
pub const POINTER_RANGE: i32 = 255;
/// Number of value steps across the pointer range.
pub const VALUE_SPAN: u32 = 76;
pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = MIN_VALUE + VALUE_SPAN;

/// Map a widget-local pointer x to a line width.
///
/// Returns `None` outside `0..=POINTER_RANGE`.
pub fn value_for_offset(local_x: i32) -> Option<u32> {
    if !(0..=POINTER_RANGE).contains(&local_x) {
        return None;
    }
    Some(local_x as u32 * VALUE_SPAN / POINTER_RANGE as u32 + MIN_VALUE)
}

/// Snapshot of the slider's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    /// Selected line width, always in `MIN_VALUE..=MAX_VALUE`.
    pub value: u32,
    /// Indicator center x, always in `TRACK_START_X..=TRACK_END_X`.
    pub indicator_position: i32,
}

/// Event-processing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPhase {
    /// Waiting for input.
    Idle,
    /// Applying a pointer event: state update, redraw, listener calls.
    Updating,
}

/// Slider for picking a stroke width.
pub struct LineWidthSlider<B> {
    canvas: CanvasWidget<B, LineWidthSlider<B>>,
    state: SliderState,
    theme: SliderTheme,
    phase: SliderPhase,
}

impl<B: SdiBackend> LineWidthSlider<B> {
    /// Bind a slider to `surface` with the default colors and draw it.
    ///
    /// `line_width` and `xpos` are clamped into their domains.
    pub fn new(
        canvas_id: &str,
        surface: B,
        line_width: u32,
        xpos: i32,
        position: WidgetPosition,
    ) -> Result<Self> {
        Self::with_theme(
            canvas_id,
            surface,
            line_width,
            xpos,
            position,
            SliderTheme::default(),
        )
    }

    /// Like [`LineWidthSlider::new`], with a custom color scheme.
    pub fn with_theme(
        canvas_id: &str,
        surface: B,
        line_width: u32,
        xpos: i32,
        position: WidgetPosition,
        theme: SliderTheme,
    ) -> Result<Self> {
        let canvas = CanvasWidget::new(
            canvas_id,
            surface,
            position,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
        )?;

        let value = line_width.clamp(MIN_VALUE, MAX_VALUE);
        if value != line_width {
            log::warn!("Line width {line_width} out of range, clamped to {value}");
        }
        let indicator_position = xpos.clamp(TRACK_START_X, TRACK_END_X);
        if indicator_position != xpos {
            log::warn!("Indicator x {xpos} off track, clamped to {indicator_position}");
        }

        let mut slider = Self {
            canvas,
            state: SliderState {
                value,
                indicator_position,
            },
            theme,
            phase: SliderPhase::Idle,
        };
        slider.render()?;
        Ok(slider)
    }

    pub fn value(&self) -> u32 {
        self.state.value
    }

    pub fn indicator_position(&self) -> i32 {
        self.state.indicator_position
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn phase(&self) -> SliderPhase {
        self.phase
    }

    pub fn theme(&self) -> &SliderTheme {
        &self.theme
    }

    /// Indicator radius in pixels (half the line width, rounded down).
    pub fn indicator_radius(&self) -> u16 {
        (self.state.value / 2) as u16
    }

    pub fn canvas(&self) -> &CanvasWidget<B, Self> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasWidget<B, Self> {
        &mut self.canvas
    }

    pub fn surface(&self) -> &B {
        self.canvas.surface()
    }

    pub fn surface_mut(&mut self) -> &mut B {
        self.canvas.surface_mut()
    }

    /// React to a widget-local pointer position.
    ///
    /// Positions outside `0..=POINTER_RANGE` are ignored. Returns `true`
    /// if the event was applied.
    pub fn check_widget_event(&mut self, local_x: i32) -> Result<bool> {
        let Some(value) = value_for_offset(local_x) else {
            log::debug!("Ignoring pointer at x={local_x} on '{}'", self.canvas.id());
            return Ok(false);
        };

        self.phase = SliderPhase::Updating;
        let result = self.apply(value);
        self.phase = SliderPhase::Idle;
        result.map(|()| true)
    }

    fn apply(&mut self, value: u32) -> Result<()> {
        self.state.value = value;
        log::debug!("Line width on '{}' set to {value}", self.canvas.id());
        self.render()?;
        self.call_widget_listeners();
        Ok(())
    }

    fn call_widget_listeners(&mut self) {
        let mut listeners = self.canvas.take_listeners();
        listeners.notify(self);
        self.canvas.restore_listeners(listeners);
    }
}

impl<B: SdiBackend> Widget for LineWidthSlider<B> {
    fn render(&mut self) -> Result<()> {
        let theme = self.theme;
        let radius = self.indicator_radius();
        let cx = self.state.indicator_position;
        let surface = self.canvas.surface_mut();

        surface.clear_rect(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT)?;

        // Track.
        surface.fill_rect(0, 0, CANVAS_WIDTH, BAND_HEIGHT, theme.band)?;
        surface.draw_line(
            TRACK_START_X,
            TRACK_Y,
            TRACK_END_X,
            TRACK_Y,
            1,
            theme.centerline,
        )?;
        surface.draw_line(
            TRACK_START_X,
            GUIDE_TOP_Y,
            TRACK_END_X,
            GUIDE_TOP_Y,
            1,
            theme.guide,
        )?;
        surface.draw_line(
            TRACK_START_X,
            GUIDE_BOTTOM_Y,
            TRACK_END_X,
            GUIDE_BOTTOM_Y,
            1,
            theme.guide,
        )?;

        // Indicator.
        surface.fill_circle(cx, TRACK_Y, radius, theme.indicator)
    }

    fn handle_input(&mut self, event: &InputEvent) -> Result<bool> {
        match self.canvas.route(event) {
            Some((local_x, _)) => self.check_widget_event(local_x),
            None => Ok(false),
        }
    }

    fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Self) + 'static,
    {
        self.canvas.listeners_mut().add(listener)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.canvas.listeners_mut().remove(id)
    }
}
