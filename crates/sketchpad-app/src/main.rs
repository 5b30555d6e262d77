//! sketchpad headless demo.
//!
//! Builds a line-width slider on a software framebuffer, replays a
//! press/drag/release sequence across its track and saves the final frame
//! as a PNG.
//!
//! Usage:
//!   cargo run -p sketchpad-app -- [config.toml]
//!   SKETCHPAD_CONFIG=slider.toml cargo run -p sketchpad-app

mod demo;

use anyhow::{Context, Result};

use sketchpad_types::backend::SdiBackend;
use sketchpad_types::config::SketchConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, SKETCHPAD_CONFIG env var, or defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SKETCHPAD_CONFIG").ok())
    {
        Some(path) => SketchConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => SketchConfig::default(),
    };
    log::info!(
        "Starting sketchpad demo on canvas '{}' (width {}, x {})",
        config.canvas_id,
        config.initial_value,
        config.initial_position,
    );

    let events = demo::drag_events(config.position);
    let mut session = demo::run_session(&config, &events)?;
    log::info!(
        "Replayed {} events, {} value changes, final width {}",
        events.len(),
        session.reported.len(),
        session.slider.value()
    );

    session.slider.surface().write_png(&config.output_path)?;
    session.slider.surface_mut().shutdown()?;
    Ok(())
}
