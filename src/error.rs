use thiserror::Error;

use crate::config::RequestCode;

/// Kind reported to a handle armed while another share is still pending.
pub const CONCURRENT_SHARE_ERROR: &str = "ConcurrentShareError";

pub const CONCURRENT_SHARE_MESSAGE: &str =
    "prior share-sheet did not call back; await results or use a fire-and-forget variant";

/// Kind reported to a pending handle when the chooser could not be launched.
pub const SHARE_FAILED: &str = "Share failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("{kind}: {message}")]
    Rejected { kind: String, message: String },
    #[error("share handle dropped before a result arrived")]
    Abandoned,
    #[error("a share is already pending")]
    Concurrent,
    #[error("chooser launch failed")]
    Launch(#[from] LaunchError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LaunchError(pub String);

impl LaunchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("request code {0:#x} does not fit in 16 bits")]
    RequestCodeOutOfRange(RequestCode),
    #[error("namespace must not be empty")]
    EmptyNamespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("request code {0:#x} is already reserved by another listener")]
    CodeInUse(RequestCode),
}
