//! Input lock held for the duration of one exchange.

use std::ops::{Deref, DerefMut};

use crate::view::ChatView;

/// Disables input on acquire. On drop it removes a placeholder that is
/// still shown, re-enables input, and restores focus, so every exit
/// path (including a cancelled future) leaves the view usable.
pub(crate) struct InputLock<'a, V: ChatView + ?Sized> {
    view: &'a mut V,
    pending: bool,
}

impl<'a, V: ChatView + ?Sized> InputLock<'a, V> {
    pub(crate) fn acquire(view: &'a mut V) -> Self {
        view.set_input_enabled(false);
        Self {
            view,
            pending: false,
        }
    }

    pub(crate) fn begin_pending(&mut self) {
        if !self.pending {
            self.view.show_pending();
            self.pending = true;
        }
    }

    pub(crate) fn end_pending(&mut self) {
        if self.pending {
            self.view.clear_pending();
            self.pending = false;
        }
    }
}

impl<V: ChatView + ?Sized> Deref for InputLock<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: ChatView + ?Sized> DerefMut for InputLock<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: ChatView + ?Sized> Drop for InputLock<'_, V> {
    fn drop(&mut self) {
        self.end_pending();
        self.view.set_input_enabled(true);
        self.view.focus_input();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Transcript;

    #[test]
    fn lock_disables_then_restores_input() {
        let mut transcript = Transcript::new();
        {
            let lock = InputLock::acquire(&mut transcript);
            assert!(!lock.input_enabled());
        }
        assert!(transcript.input_enabled());
        assert_eq!(transcript.focus_count(), 1);
    }

    #[test]
    fn drop_clears_leftover_placeholder() {
        let mut transcript = Transcript::new();
        {
            let mut lock = InputLock::acquire(&mut transcript);
            lock.begin_pending();
            assert!(lock.has_pending());
        }
        assert!(!transcript.has_pending());
    }

    #[test]
    fn end_pending_is_once_only() {
        let mut transcript = Transcript::new();
        let mut lock = InputLock::acquire(&mut transcript);
        lock.begin_pending();
        lock.begin_pending();
        lock.end_pending();
        lock.end_pending();
        drop(lock);
        assert!(transcript.entries().is_empty());
    }
}
