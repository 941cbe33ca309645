use std::{sync::Arc, time::Instant};

use futures::executor::block_on;
use rand::Rng;
use shareback::{
    result_channel, ChooserLauncher, Host, HostEvent, LaunchError, LaunchOutcome, RequestCode,
    ResultMailbox, ShareError, ShareResultCorrelator,
};

/// Chooser which picks a random target, sometimes fails or is unavailable.
struct RandomChooser {
    targets: Vec<&'static str>,
}

impl ChooserLauncher for RandomChooser {
    fn launch(
        &self,
        _request_code: RequestCode,
        mailbox: &ResultMailbox,
    ) -> Result<LaunchOutcome, LaunchError> {
        let mut rng = rand::thread_rng();
        match rng.gen::<usize>() % 10 {
            0 => Err(LaunchError::new("activity went away")),
            1 => Ok(LaunchOutcome::Unavailable),
            2 => Ok(LaunchOutcome::Started), // dismissed, mailbox stays empty
            _ => {
                let target = self.targets[rng.gen::<usize>() % self.targets.len()];
                mailbox.publish(target);
                Ok(LaunchOutcome::Started)
            }
        }
    }
}

fn main() {
    let now = Instant::now();
    let mut rng = rand::thread_rng();

    let shares = 10_000;

    let host = Host::default();
    let correlator = Arc::new(ShareResultCorrelator::default());
    host.register(correlator.clone())
        .expect("share request code is free");

    let chooser = RandomChooser {
        targets: vec!["mail/.Compose", "chat/.Send", "notes/.Import"],
    };

    let mut chosen = 0;
    let mut dismissed = 0;
    let mut unavailable = 0;
    let mut failed = 0;
    let mut refused = 0;

    for _ in 0..shares {
        let (sender, result) = result_channel();
        match correlator.share_with_result(&chooser, sender) {
            Ok(()) => {}
            Err(ShareError::Concurrent) => {
                refused += 1;
                continue;
            }
            Err(_) => {
                failed += 1;
                assert!(matches!(block_on(result), Err(ShareError::Rejected { .. })));
                continue;
            }
        }

        // unrelated host traffic, sometimes before the real completion
        for _ in 0..rng.gen::<usize>() % 3 {
            assert!(!host.dispatch(&HostEvent::new(0x42, 0)));
        }
        host.dispatch(&HostEvent::new(correlator.request_code(), -1));

        let value = block_on(result).expect("share resolves once");
        if value.is_empty() {
            dismissed += 1;
        } else if value == correlator.config().unavailable_sentinel() {
            unavailable += 1;
        } else {
            chosen += 1;
        }
        assert!(!correlator.is_pending());
    }

    assert_eq!(refused, 0);
    assert_eq!(chosen + dismissed + unavailable + failed, shares);

    let elapsed = now.elapsed();

    println!("Chosen: {chosen}");
    println!("Dismissed: {dismissed}");
    println!("Unavailable: {unavailable}");
    println!("Launch failures: {failed}");
    println!("Elapsed: {:.2?}", elapsed);
}
