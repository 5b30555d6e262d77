//! Platform-agnostic pointer input events.
//!
//! Hosts map their native mouse/touch input to these variants. Coordinates
//! are in page space; widgets translate them to their own local space.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute position.
    CursorMove { x: i32, y: i32 },
    /// Pointer pressed at absolute position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// Pointer released.
    PointerRelease { x: i32, y: i32 },
    /// The host surface gained focus.
    FocusGained,
    /// The host surface lost focus.
    FocusLost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_differs_from_release() {
        let press = InputEvent::PointerClick { x: 1, y: 1 };
        let release = InputEvent::PointerRelease { x: 1, y: 1 };
        assert_ne!(press, release);
    }
}
