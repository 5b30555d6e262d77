//! Base canvas widget: surface ownership, pointer routing, listeners.
//!
//! Concrete widgets embed a `CanvasWidget` and forward `Widget` calls to
//! it. The base turns page-space input into widget-local points and tracks
//! whether a drag is in progress:
//!
//! - `PointerClick` inside the canvas starts a drag and is forwarded.
//! - `CursorMove` is forwarded only while dragging, even outside the canvas.
//! - `PointerRelease` and `FocusLost` end the drag and are not forwarded.

use sketchpad_types::backend::SdiBackend;
use sketchpad_types::config::WidgetPosition;
use sketchpad_types::error::{Result, SketchError};
use sketchpad_types::input::InputEvent;

use crate::listeners::Listeners;

/// Shared widget plumbing over an exclusively owned surface `B`.
///
/// `W` is the concrete widget type handed to listeners.
pub struct CanvasWidget<B, W> {
    id: String,
    surface: B,
    position: WidgetPosition,
    width: u32,
    height: u32,
    dragging: bool,
    listeners: Listeners<W>,
}

impl<B: SdiBackend, W> CanvasWidget<B, W> {
    /// Bind a surface to a canvas id and initialize it at `width` x `height`.
    pub fn new(
        canvas_id: &str,
        mut surface: B,
        position: WidgetPosition,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        validate_canvas_id(canvas_id)?;
        surface.init(width, height).map_err(|e| {
            SketchError::Surface(format!("canvas '{canvas_id}': {e}"))
        })?;
        log::debug!(
            "Canvas '{canvas_id}' bound at ({}, {}) size {width}x{height}",
            position.x,
            position.y
        );
        Ok(Self {
            id: canvas_id.to_string(),
            surface,
            position,
            width,
            height,
            dragging: false,
            listeners: Listeners::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> WidgetPosition {
        self.position
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn surface(&self) -> &B {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut B {
        &mut self.surface
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Translate a page-space point into widget-local coordinates.
    pub fn canvas_pos(&self, page_x: i32, page_y: i32) -> (i32, i32) {
        (page_x - self.position.x, page_y - self.position.y)
    }

    /// Whether a widget-local point lies on the canvas.
    pub fn contains(&self, local_x: i32, local_y: i32) -> bool {
        local_x >= 0
            && local_y >= 0
            && (local_x as u32) < self.width
            && (local_y as u32) < self.height
    }

    /// Update drag state for `event` and return the local point the
    /// concrete widget should react to, if any.
    pub fn route(&mut self, event: &InputEvent) -> Option<(i32, i32)> {
        match *event {
            InputEvent::PointerClick { x, y } => {
                let (lx, ly) = self.canvas_pos(x, y);
                if self.contains(lx, ly) {
                    self.dragging = true;
                    Some((lx, ly))
                } else {
                    None
                }
            },
            InputEvent::CursorMove { x, y } if self.dragging => Some(self.canvas_pos(x, y)),
            InputEvent::PointerRelease { .. } | InputEvent::FocusLost => {
                self.dragging = false;
                None
            },
            InputEvent::CursorMove { .. } | InputEvent::FocusGained => None,
        }
    }

    pub fn listeners(&self) -> &Listeners<W> {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut Listeners<W> {
        &mut self.listeners
    }

    /// Detach the listener list so it can be notified with a borrow of the
    /// owning widget. Pair with [`CanvasWidget::restore_listeners`].
    pub fn take_listeners(&mut self) -> Listeners<W> {
        std::mem::take(&mut self.listeners)
    }

    pub fn restore_listeners(&mut self, listeners: Listeners<W>) {
        self.listeners = listeners;
    }
}

/// Canvas ids are non-empty ASCII identifiers (`[A-Za-z0-9_-]+`).
pub fn validate_canvas_id(canvas_id: &str) -> Result<()> {
    if canvas_id.is_empty() {
        return Err(SketchError::Surface("empty canvas id".into()));
    }
    if !canvas_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(SketchError::Surface(format!(
            "invalid canvas id '{canvas_id}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockBackend;

    fn canvas_at(x: i32, y: i32) -> CanvasWidget<MockBackend, ()> {
        CanvasWidget::new("c", MockBackend::new(), WidgetPosition::new(x, y), 250, 120)
            .unwrap()
    }

    #[test]
    fn new_initializes_surface() {
        let c = canvas_at(0, 0);
        assert_eq!(c.surface().initialized, Some((250, 120)));
        assert_eq!(c.id(), "c");
        assert_eq!(c.position(), WidgetPosition::ORIGIN);
        assert_eq!(c.size(), (250, 120));
        assert!(!c.is_dragging());
    }

    #[test]
    fn new_rejects_empty_id() {
        let err = CanvasWidget::<_, ()>::new("", MockBackend::new(), WidgetPosition::ORIGIN, 1, 1)
            .err()
            .unwrap();
        assert!(matches!(err, SketchError::Surface(_)));
    }

    #[test]
    fn new_rejects_malformed_id() {
        for id in ["line width", "#canvas", "wid\u{e9}th"] {
            let r =
                CanvasWidget::<_, ()>::new(id, MockBackend::new(), WidgetPosition::ORIGIN, 1, 1);
            assert!(r.is_err(), "{id} should be rejected");
        }
        assert!(validate_canvas_id("line_width-2").is_ok());
    }

    #[test]
    fn new_surfaces_backend_init_failure() {
        let err = CanvasWidget::<_, ()>::new(
            "c",
            MockBackend::failing_init(),
            WidgetPosition::ORIGIN,
            250,
            120,
        )
        .err()
        .unwrap();
        let msg = format!("{err}");
        assert!(msg.contains("canvas 'c'"), "{msg}");
    }

    #[test]
    fn canvas_pos_subtracts_offset() {
        let c = canvas_at(100, 40);
        assert_eq!(c.canvas_pos(100, 40), (0, 0));
        assert_eq!(c.canvas_pos(95, 78), (-5, 38));
        assert_eq!(c.canvas_pos(355, 40), (255, 0));
    }

    #[test]
    fn contains_is_half_open() {
        let c = canvas_at(0, 0);
        assert!(c.contains(0, 0));
        assert!(c.contains(249, 119));
        assert!(!c.contains(250, 10));
        assert!(!c.contains(10, 120));
        assert!(!c.contains(-1, 10));
    }

    #[test]
    fn click_inside_starts_drag() {
        let mut c = canvas_at(10, 10);
        assert_eq!(
            c.route(&InputEvent::PointerClick { x: 20, y: 48 }),
            Some((10, 38))
        );
        assert!(c.is_dragging());
    }

    #[test]
    fn click_outside_is_ignored() {
        let mut c = canvas_at(10, 10);
        assert_eq!(c.route(&InputEvent::PointerClick { x: 5, y: 48 }), None);
        assert!(!c.is_dragging());
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut c = canvas_at(0, 0);
        assert_eq!(c.route(&InputEvent::CursorMove { x: 10, y: 10 }), None);
    }

    #[test]
    fn drag_forwards_moves_outside_canvas() {
        let mut c = canvas_at(0, 0);
        c.route(&InputEvent::PointerClick { x: 10, y: 10 });
        assert_eq!(
            c.route(&InputEvent::CursorMove { x: 300, y: 10 }),
            Some((300, 10))
        );
        assert_eq!(
            c.route(&InputEvent::CursorMove { x: -5, y: 10 }),
            Some((-5, 10))
        );
    }

    #[test]
    fn release_ends_drag() {
        let mut c = canvas_at(0, 0);
        c.route(&InputEvent::PointerClick { x: 10, y: 10 });
        assert_eq!(
            c.route(&InputEvent::PointerRelease { x: 20, y: 10 }),
            None
        );
        assert!(!c.is_dragging());
        assert_eq!(c.route(&InputEvent::CursorMove { x: 30, y: 10 }), None);
    }

    #[test]
    fn focus_lost_ends_drag() {
        let mut c = canvas_at(0, 0);
        c.route(&InputEvent::PointerClick { x: 10, y: 10 });
        assert_eq!(c.route(&InputEvent::FocusLost), None);
        assert!(!c.is_dragging());
        assert_eq!(c.route(&InputEvent::FocusGained), None);
    }

    #[test]
    fn take_and_restore_listeners() {
        let mut c = canvas_at(0, 0);
        c.listeners_mut().add(|_| {});
        let taken = c.take_listeners();
        assert!(c.listeners().is_empty());
        c.restore_listeners(taken);
        assert_eq!(c.listeners().len(), 1);
    }
}
