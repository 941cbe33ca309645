use std::{
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use futures::Future;
use parking_lot::Mutex;

use crate::{error::ShareError, shared::SharedState};

/// Caller side of a pending share.
///
/// Both operations consume the handle, so a handle can be resolved at most once.
pub trait CompletionHandle: Send {
    fn succeed(self: Box<Self>, value: String);

    fn fail(self: Box<Self>, kind: &str, message: &str);
}

type Slot = Arc<Mutex<SharedState<Result<String, ShareError>>>>;

/// Creates a handle together with the future its owner awaits.
pub fn result_channel() -> (ResultSender, ShareResult) {
    let slot: Slot = Arc::new(Mutex::new(SharedState::default()));
    (
        ResultSender {
            slot: Some(slot.clone()),
        },
        ShareResult { slot },
    )
}

/// [`CompletionHandle`] which delivers the outcome to a [`ShareResult`].
///
/// Dropping it unresolved completes the paired future with [`ShareError::Abandoned`].
pub struct ResultSender {
    slot: Option<Slot>,
}

impl ResultSender {
    fn deliver(mut self, outcome: Result<String, ShareError>) {
        if let Some(slot) = self.slot.take() {
            let waker = slot.lock().put(outcome);
            if let Some(waker) = waker {
                waker.wake();
            }
        }
    }
}

impl CompletionHandle for ResultSender {
    fn succeed(self: Box<Self>, value: String) {
        (*self).deliver(Ok(value));
    }

    fn fail(self: Box<Self>, kind: &str, message: &str) {
        (*self).deliver(Err(ShareError::Rejected {
            kind: kind.to_string(),
            message: message.to_string(),
        }));
    }
}

impl Drop for ResultSender {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            let waker = slot.lock().close();
            if let Some(waker) = waker {
                waker.wake();
            }
        }
    }
}

/// Outcome of a share, resolved once by the paired [`ResultSender`].
pub struct ShareResult {
    slot: Slot,
}

impl ShareResult {
    /// Returns the outcome if it has already arrived.
    /// Once the outcome was taken, further calls return `None`.
    pub fn try_take(&mut self) -> Option<Result<String, ShareError>> {
        match self.slot.lock().try_take() {
            Poll::Ready(outcome) => Some(outcome.unwrap_or(Err(ShareError::Abandoned))),
            Poll::Pending => None,
        }
    }
}

impl Future for ShareResult {
    type Output = Result<String, ShareError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.slot
            .lock()
            .take(cx.waker())
            .map(|outcome| outcome.unwrap_or(Err(ShareError::Abandoned)))
    }
}
