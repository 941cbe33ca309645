#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Succeed(String),
    Fail(String, String),
}

/// Handle which records every call made on it.
pub struct RecordingHandle {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingHandle {
    pub fn new() -> (Self, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl shareback::CompletionHandle for RecordingHandle {
    fn succeed(self: Box<Self>, value: String) {
        self.calls.lock().push(Call::Succeed(value));
    }

    fn fail(self: Box<Self>, kind: &str, message: &str) {
        self.calls
            .lock()
            .push(Call::Fail(kind.to_string(), message.to_string()));
    }
}

pub fn share_event() -> shareback::HostEvent {
    shareback::HostEvent::new(shareback::DEFAULT_REQUEST_CODE, -1)
}
