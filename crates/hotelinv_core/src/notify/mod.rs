//! Single-subscriber change notification.
//!
//! # Invariants
//! - At most one listener is registered; a new registration replaces the old.
//! - Repositories fire only after a mutation has been persisted.

/// Callback invoked with no arguments after a successful mutation.
pub type ChangeListener = Box<dyn FnMut() + Send>;

#[derive(Default)]
pub struct ChangeNotifier {
    listener: Option<ChangeListener>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut() + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the registered listener, if any.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub(crate) fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener();
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}
