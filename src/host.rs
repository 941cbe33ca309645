use std::sync::Arc;

use parking_lot::RwLock;

use crate::{config::RequestCode, correlator::ShareResultCorrelator, error::DispatchError};

/// Notification that an operation started by the host has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEvent {
    pub request_code: RequestCode,
    pub result_code: i32,
}

impl HostEvent {
    pub fn new(request_code: RequestCode, result_code: i32) -> Self {
        Self {
            request_code,
            result_code,
        }
    }
}

/// Represents requirements for a receiver of host completion events.
pub trait ActivityResultListener: Send + Sync {
    /// Code reserved by this listener.
    fn request_code(&self) -> RequestCode;

    /// Returns whether the event was consumed.
    fn on_activity_result(&self, event: &HostEvent) -> bool;
}

impl ActivityResultListener for ShareResultCorrelator {
    fn request_code(&self) -> RequestCode {
        ShareResultCorrelator::request_code(self)
    }

    fn on_activity_result(&self, event: &HostEvent) -> bool {
        self.on_external_event(event)
    }
}

/// Registry of completion listeners the platform delivers events through.
#[derive(Default)]
pub struct Host {
    listeners: RwLock<Vec<Arc<dyn ActivityResultListener>>>,
}

impl Host {
    pub fn register(
        &self,
        listener: Arc<dyn ActivityResultListener>,
    ) -> Result<(), DispatchError> {
        let code = listener.request_code();
        let mut listeners = self.listeners.write();
        if listeners.iter().any(|l| l.request_code() == code) {
            return Err(DispatchError::CodeInUse(code));
        }
        listeners.push(listener);
        tracing::debug!(request_code = code, "listener registered");
        Ok(())
    }

    pub fn unregister(&self, code: RequestCode) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|l| l.request_code() != code);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Offers `event` to listeners in registration order until one consumes it.
    pub fn dispatch(&self, event: &HostEvent) -> bool {
        // listeners may register or unregister while handling the event
        let listeners = self.listeners.read().clone();
        let consumed = listeners.iter().any(|l| l.on_activity_result(event));
        if !consumed {
            tracing::debug!(
                request_code = event.request_code,
                result_code = event.result_code,
                "event not consumed by any listener"
            );
        }
        consumed
    }
}
