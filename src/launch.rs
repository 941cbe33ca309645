use crate::{
    config::RequestCode,
    correlator::ShareResultCorrelator,
    error::{LaunchError, ShareError, SHARE_FAILED},
    handle::CompletionHandle,
    mailbox::ResultMailbox,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Chooser is shown; its completion arrives later as a host event.
    Started,
    /// Nothing is able to receive the completion event.
    Unavailable,
}

/// Shows a chooser whose completion is reported under `request_code`.
///
/// The chosen target must be published into `mailbox` before the host
/// delivers the completion event.
pub trait ChooserLauncher {
    fn launch(
        &self,
        request_code: RequestCode,
        mailbox: &ResultMailbox,
    ) -> Result<LaunchOutcome, LaunchError>;
}

impl ShareResultCorrelator {
    /// Arms `handle` and launches a chooser through `launcher`.
    ///
    /// When arming is refused the handle has already been failed and
    /// [`ShareError::Concurrent`] is returned. A failed launch fails the handle
    /// with [`SHARE_FAILED`] and releases the correlator before the error is
    /// returned.
    pub fn share_with_result<L, H>(&self, launcher: &L, handle: H) -> Result<(), ShareError>
    where
        L: ChooserLauncher + ?Sized,
        H: CompletionHandle + 'static,
    {
        if !self.arm(handle) {
            return Err(ShareError::Concurrent);
        }
        match launcher.launch(self.request_code(), &self.mailbox()) {
            Ok(LaunchOutcome::Started) => Ok(()),
            Ok(LaunchOutcome::Unavailable) => {
                self.signal_unavailable();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(request_code = self.request_code(), %err, "chooser launch failed");
                self.fail_pending(SHARE_FAILED, &err.to_string());
                Err(err.into())
            }
        }
    }
}
