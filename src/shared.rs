use std::task::{Poll, Waker};

/// Producer must put the value at most once, or close the slot;
/// consumer takes the value no more than once.
#[derive(Default)]
pub(crate) enum SharedState<T> {
    #[default]
    Initial,
    Ready(T),
    Waiting(Waker),
    /// Producer went away without putting a value.
    Closed,
    Taken,
}

impl<T> SharedState<T> {
    /// If value is already put, then value is returned.
    /// Else, waker will be stored and called after value will be put.
    /// `Ready(None)` means the producer closed the slot.
    pub(crate) fn take(&mut self, waker: &Waker) -> Poll<Option<T>> {
        match std::mem::replace(self, SharedState::Taken) {
            SharedState::Initial | SharedState::Waiting(_) => {
                *self = SharedState::Waiting(waker.clone());
                Poll::Pending
            }
            SharedState::Ready(value) => Poll::Ready(Some(value)),
            SharedState::Closed => Poll::Ready(None),
            SharedState::Taken => panic!("taking value twice is contract violation"),
        }
    }

    /// Non-blocking variant of [`SharedState::take`] which does not register a waker.
    /// Stays pending once the value was taken.
    pub(crate) fn try_take(&mut self) -> Poll<Option<T>> {
        match std::mem::replace(self, SharedState::Taken) {
            SharedState::Ready(value) => Poll::Ready(Some(value)),
            SharedState::Closed => Poll::Ready(None),
            pending => {
                *self = pending;
                Poll::Pending
            }
        }
    }

    /// Store provided value.
    /// If there is registered waker, it will be waked.
    pub(crate) fn put(&mut self, value: T) -> Option<Waker> {
        match std::mem::replace(self, SharedState::Ready(value)) {
            SharedState::Initial => None,
            SharedState::Waiting(waker) => Some(waker),
            SharedState::Ready(_) | SharedState::Closed | SharedState::Taken => {
                panic!("putting value twice is contract violation")
            }
        }
    }

    /// Mark the slot as closed unless a value was already put.
    pub(crate) fn close(&mut self) -> Option<Waker> {
        match std::mem::replace(self, SharedState::Closed) {
            SharedState::Initial => None,
            SharedState::Waiting(waker) => Some(waker),
            done => {
                *self = done;
                None
            }
        }
    }
}
