//! sketchpad-ui: canvas widgets built on `SdiBackend`.
//!
//! A widget owns its drawing surface through a [`CanvasWidget`], which
//! handles pointer routing, coordinate translation and listener
//! bookkeeping. Concrete widgets such as [`LineWidthSlider`] only decide
//! what to draw and how pointer positions map to state.

pub mod canvas;
pub mod line_width;
pub mod listeners;
pub mod theme;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use canvas::CanvasWidget;
pub use line_width::{LineWidthSlider, SliderPhase, SliderState};
pub use listeners::{ListenerId, Listeners};
pub use sketchpad_types::config::WidgetPosition;
pub use theme::SliderTheme;
pub use widget::Widget;
