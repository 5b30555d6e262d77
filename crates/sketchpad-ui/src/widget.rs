//! Widget trait definition.

use sketchpad_types::error::Result;
use sketchpad_types::input::InputEvent;

use crate::listeners::ListenerId;

/// Minimum interface for an interactive canvas widget.
pub trait Widget {
    /// Redraw the widget onto its surface from current state.
    fn render(&mut self) -> Result<()>;

    /// Feed a page-space input event to the widget.
    ///
    /// Returns `true` if the widget state changed.
    fn handle_input(&mut self, event: &InputEvent) -> Result<bool>;

    /// Register a callback fired after every state change. The callback
    /// receives the widget so the new state can be read back from it.
    fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Self) + 'static,
        Self: Sized;

    /// Unregister a callback. Returns `false` if the id is unknown.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}
