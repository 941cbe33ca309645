mod common;

use std::sync::Arc;

use common::{Call, RecordingHandle};
use futures::executor::block_on;
use parking_lot::Mutex;
use shareback::{
    result_channel, ChooserLauncher, Host, HostEvent, LaunchError, LaunchOutcome, RequestCode,
    ResultMailbox, ShareError, ShareResultCorrelator, SHARE_FAILED,
};

/// Launcher which remembers where to publish and lets the test finish the chooser.
#[derive(Default)]
struct FakeChooser {
    launched: Mutex<Option<(RequestCode, ResultMailbox)>>,
    outcome: Option<Result<LaunchOutcome, LaunchError>>,
}

impl FakeChooser {
    fn with_outcome(outcome: Result<LaunchOutcome, LaunchError>) -> Self {
        Self {
            launched: Mutex::new(None),
            outcome: Some(outcome),
        }
    }

    fn choose(&self, host: &Host, target: &str) -> bool {
        let (code, mailbox) = self.launched.lock().take().expect("chooser was not launched");
        mailbox.publish(target);
        host.dispatch(&HostEvent::new(code, -1))
    }
}

impl ChooserLauncher for FakeChooser {
    fn launch(
        &self,
        request_code: RequestCode,
        mailbox: &ResultMailbox,
    ) -> Result<LaunchOutcome, LaunchError> {
        let outcome = self.outcome.clone().unwrap_or(Ok(LaunchOutcome::Started));
        if outcome == Ok(LaunchOutcome::Started) {
            *self.launched.lock() = Some((request_code, mailbox.clone()));
        }
        outcome
    }
}

#[test]
fn started_share_resolves_through_host() {
    let host = Host::default();
    let correlator = Arc::new(ShareResultCorrelator::default());
    host.register(correlator.clone()).unwrap();

    let chooser = FakeChooser::default();
    let (sender, result) = result_channel();
    correlator.share_with_result(&chooser, sender).unwrap();
    assert!(correlator.is_pending());

    assert!(chooser.choose(&host, "com.example.mail/.Compose"));
    assert_eq!(
        block_on(result),
        Ok("com.example.mail/.Compose".to_string())
    );
    assert!(!correlator.is_pending());
}

#[test]
fn unavailable_launch_resolves_immediately() {
    let correlator = ShareResultCorrelator::default();
    let chooser = FakeChooser::with_outcome(Ok(LaunchOutcome::Unavailable));
    let (handle, calls) = RecordingHandle::new();

    correlator.share_with_result(&chooser, handle).unwrap();
    assert_eq!(
        *calls.lock(),
        vec![Call::Succeed(correlator.config().unavailable_sentinel())]
    );
    assert!(!correlator.is_pending());
}

#[test]
fn failed_launch_releases_correlator() {
    let correlator = ShareResultCorrelator::default();
    let chooser = FakeChooser::with_outcome(Err(LaunchError::new("no activity")));
    let (sender, result) = result_channel();

    assert_eq!(
        correlator.share_with_result(&chooser, sender),
        Err(ShareError::Launch(LaunchError::new("no activity")))
    );
    assert_eq!(
        block_on(result),
        Err(ShareError::Rejected {
            kind: SHARE_FAILED.to_string(),
            message: "no activity".to_string()
        })
    );

    let (handle, _) = RecordingHandle::new();
    assert!(correlator.arm(handle));
}

#[test]
fn failed_launch_fails_handle_once() {
    let correlator = ShareResultCorrelator::default();
    let chooser = FakeChooser::with_outcome(Err(LaunchError::new("no activity")));
    let (handle, calls) = RecordingHandle::new();

    assert!(correlator.share_with_result(&chooser, handle).is_err());
    assert_eq!(
        *calls.lock(),
        vec![Call::Fail(
            SHARE_FAILED.to_string(),
            "no activity".to_string()
        )]
    );
    assert!(!correlator.is_pending());

    // a late event for the failed launch finds nothing to resolve
    assert!(correlator.on_external_event(&HostEvent::new(correlator.request_code(), 0)));
    assert_eq!(calls.lock().len(), 1);
}

#[test]
fn overlapping_share_is_refused() {
    let correlator = ShareResultCorrelator::default();
    let chooser = FakeChooser::default();
    let (first, first_calls) = RecordingHandle::new();
    correlator.share_with_result(&chooser, first).unwrap();

    let (second, second_calls) = RecordingHandle::new();
    assert_eq!(
        correlator.share_with_result(&chooser, second),
        Err(ShareError::Concurrent)
    );
    assert!(matches!(second_calls.lock().as_slice(), [Call::Fail(_, _)]));
    assert!(first_calls.lock().is_empty());
    assert!(correlator.is_pending());
}
