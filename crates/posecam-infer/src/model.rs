use std::sync::{Arc, Mutex};

/// Shared holder for a model that finishes loading some time after startup.
///
/// Clones share the same slot. Until `install` is called the slot is not
/// ready and `with_model` returns `None`. Nothing retries a failed load; the
/// slot simply stays empty.
pub struct ModelSlot<E> {
    inner: Arc<Mutex<Option<E>>>,
}

impl<E> Clone for ModelSlot<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for ModelSlot<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> ModelSlot<E> {
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    pub fn ready(model: E) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(model))),
        }
    }

    /// Replace whatever model is in the slot.
    pub fn install(&self, model: E) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(model);
    }

    pub fn is_ready(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Run `f` against the loaded model. The lock is held for the duration of `f`.
    pub fn with_model<R>(&self, f: impl FnOnce(&mut E) -> R) -> Option<R> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.as_mut().map(f)
    }
}
