use parking_lot::Mutex;

use crate::{
    config::{CorrelatorConfig, RequestCode},
    error::{ConfigError, CONCURRENT_SHARE_ERROR, CONCURRENT_SHARE_MESSAGE},
    handle::CompletionHandle,
    host::HostEvent,
    mailbox::ResultMailbox,
    state::{Phase, PhaseCell},
};

/// Matches the completion event of a chooser with the single caller waiting for it.
///
/// At most one request is pending at a time. The pending handle is resolved
/// at most once, either by the matching host event or by
/// [`ShareResultCorrelator::signal_unavailable`].
/// [`ShareResultCorrelator::mark_reentered`] releases the slot when no event
/// is going to arrive.
pub struct ShareResultCorrelator {
    config: CorrelatorConfig,
    phase: PhaseCell,
    /// Phase transitions which touch the handle happen while this lock is held,
    /// so the phase and the slot never disagree.
    callback: Mutex<Option<Box<dyn CompletionHandle>>>,
    mailbox: ResultMailbox,
}

impl Default for ShareResultCorrelator {
    fn default() -> Self {
        Self::with_config(CorrelatorConfig::default())
    }
}

impl ShareResultCorrelator {
    pub fn new(config: CorrelatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: CorrelatorConfig) -> Self {
        Self {
            config,
            phase: PhaseCell::default(),
            callback: Mutex::new(None),
            mailbox: ResultMailbox::default(),
        }
    }

    pub fn config(&self) -> &CorrelatorConfig {
        &self.config
    }

    pub fn request_code(&self) -> RequestCode {
        self.config.request_code
    }

    pub fn phase(&self) -> Phase {
        self.phase.phase()
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == Phase::Armed
    }

    /// Mailbox the launcher must publish into before the completion event fires.
    pub fn mailbox(&self) -> ResultMailbox {
        self.mailbox.clone()
    }

    /// Registers `handle` as the waiter of the next matching event.
    ///
    /// If a request is already pending, `handle` is failed right away with
    /// [`CONCURRENT_SHARE_ERROR`] and the pending request is left untouched.
    pub fn arm<H>(&self, handle: H) -> bool
    where
        H: CompletionHandle + 'static,
    {
        self.arm_boxed(Box::new(handle))
    }

    pub fn arm_boxed(&self, handle: Box<dyn CompletionHandle>) -> bool {
        let mut callback = self.callback.lock();
        if !self.phase.try_arm() {
            drop(callback);
            tracing::warn!(
                request_code = self.config.request_code,
                "share requested while a prior share is still pending"
            );
            handle.fail(CONCURRENT_SHARE_ERROR, CONCURRENT_SHARE_MESSAGE);
            return false;
        }
        debug_assert!(callback.is_none(), "idle correlator owns a handle");
        self.mailbox.reset();
        *callback = Some(handle);
        tracing::debug!(request_code = self.config.request_code, "share armed");
        true
    }

    /// Returns to idle unconditionally.
    ///
    /// Must be called on every return path of a launch which will not lead to
    /// a completion event. A handle still pending is dropped unresolved;
    /// use [`ShareResultCorrelator::fail_pending`] to notify it instead.
    pub fn mark_reentered(&self) {
        if self.release().is_some() {
            tracing::warn!(
                request_code = self.config.request_code,
                "pending share abandoned"
            );
        }
    }

    /// Returns to idle and fails a handle still pending with `kind` and `message`.
    ///
    /// Returns whether a handle was failed.
    pub fn fail_pending(&self, kind: &str, message: &str) -> bool {
        let Some(handle) = self.release() else {
            return false;
        };
        tracing::debug!(request_code = self.config.request_code, kind, "pending share failed");
        handle.fail(kind, message);
        true
    }

    fn release(&self) -> Option<Box<dyn CompletionHandle>> {
        let mut callback = self.callback.lock();
        self.phase.force_idle();
        callback.take()
    }

    /// Resolves the pending request with the unavailable sentinel.
    pub fn signal_unavailable(&self) {
        let sentinel = self.config.unavailable_sentinel();
        self.resolve(|| sentinel);
    }

    /// Entry point for host completion events.
    ///
    /// Events for other request codes are left to other listeners.
    /// A matching event is always consumed, even if nothing is pending.
    pub fn on_external_event(&self, event: &HostEvent) -> bool {
        if event.request_code != self.config.request_code {
            return false;
        }
        let mailbox = &self.mailbox;
        let resolved = self.resolve(|| {
            let value = mailbox.read();
            if value.is_empty() {
                tracing::debug!(
                    request_code = event.request_code,
                    result_code = event.result_code,
                    "share resolved with empty result"
                );
            }
            value
        });
        if !resolved {
            tracing::debug!(
                request_code = event.request_code,
                result_code = event.result_code,
                "completion event without pending share"
            );
        }
        true
    }

    /// The only place a pending handle is succeeded.
    fn resolve<F>(&self, result: F) -> bool
    where
        F: FnOnce() -> String,
    {
        let (handle, value) = {
            let mut callback = self.callback.lock();
            if !self.phase.try_resolve() {
                return false;
            }
            let Some(handle) = callback.take() else {
                return false;
            };
            (handle, result())
        };
        tracing::debug!(request_code = self.config.request_code, "share resolved");
        handle.succeed(value);
        true
    }
}
