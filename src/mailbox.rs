use std::sync::Arc;

use parking_lot::Mutex;

/// Hand-off slot for the chooser result.
///
/// The launcher publishes the chosen target before the completion event is
/// delivered; the correlator only reads it. An empty value means the chooser
/// was dismissed.
#[derive(Clone, Default)]
pub struct ResultMailbox(Arc<Mutex<String>>);

impl ResultMailbox {
    pub fn publish(&self, value: impl Into<String>) {
        *self.0.lock() = value.into();
    }

    pub(crate) fn reset(&self) {
        self.0.lock().clear();
    }

    pub fn read(&self) -> String {
        self.0.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

impl std::fmt::Debug for ResultMailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ResultMailbox").field(&*self.0.lock()).finish()
    }
}
