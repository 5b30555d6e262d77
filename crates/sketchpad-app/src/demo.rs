//! Scripted pointer session against a raster-backed slider.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};

use sketchpad_raster::RasterBackend;
use sketchpad_types::config::{SketchConfig, WidgetPosition};
use sketchpad_types::input::InputEvent;
use sketchpad_ui::line_width::TRACK_Y;
use sketchpad_ui::{LineWidthSlider, SliderTheme, Widget};

/// Build and draw a slider from config.
pub fn build_slider(config: &SketchConfig) -> Result<LineWidthSlider<RasterBackend>> {
    let theme = SliderTheme::from_overrides(&config.theme)?;
    LineWidthSlider::with_theme(
        &config.canvas_id,
        RasterBackend::new(),
        config.initial_value,
        config.initial_position,
        config.position,
        theme,
    )
    .with_context(|| format!("creating slider on canvas '{}'", config.canvas_id))
}

/// Press at the start of the track, sweep right past the end, wander off
/// the left edge, settle at local x=200 and release.
pub fn drag_events(position: WidgetPosition) -> Vec<InputEvent> {
    let y = position.y + TRACK_Y;
    let at = |local_x: i32| position.x + local_x;

    let mut events = vec![InputEvent::PointerClick { x: at(0), y }];
    events.extend((30..=270).step_by(30).map(|lx| InputEvent::CursorMove { x: at(lx), y }));
    events.push(InputEvent::CursorMove { x: at(-10), y });
    events.push(InputEvent::CursorMove { x: at(200), y });
    events.push(InputEvent::PointerRelease { x: at(200), y });
    events
}

/// Outcome of a scripted session.
pub struct Session {
    pub slider: LineWidthSlider<RasterBackend>,
    /// Values reported to the listener, in order.
    pub reported: Vec<u32>,
}

/// Build the slider, replay `events`, and collect listener reports.
pub fn run_session(config: &SketchConfig, events: &[InputEvent]) -> Result<Session> {
    let mut slider = build_slider(config)?;

    let reported = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reported);
    slider.add_listener(move |s: &LineWidthSlider<RasterBackend>| {
        log::info!("Line width changed: {}", s.value());
        sink.borrow_mut().push(s.value());
    });

    for event in events {
        slider.handle_input(event)?;
    }

    let reported = reported.borrow().clone();
    Ok(Session { slider, reported })
}
