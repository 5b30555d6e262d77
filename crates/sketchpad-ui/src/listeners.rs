//! Ordered change-listener collection.

use std::fmt;

/// Handle returned by [`Listeners::add`], used to unregister a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<W> = Box<dyn FnMut(&W)>;

/// Callbacks notified with a shared borrow of widget `W`.
///
/// Callbacks fire in registration order. Ids are never reused, so a stale
/// id cannot remove a newer listener.
pub struct Listeners<W> {
    entries: Vec<(ListenerId, Callback<W>)>,
    next_id: u64,
}

impl<W> Listeners<W> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback and return its id.
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&W) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Unregister a callback. Returns `false` if the id is unknown.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke every callback with `widget`.
    pub fn notify(&mut self, widget: &W) {
        for (_, listener) in &mut self.entries {
            listener(widget);
        }
    }
}

impl<W> Default for Listeners<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> fmt::Debug for Listeners<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
