mod config;
mod correlator;
mod error;
mod handle;
mod host;
mod launch;
mod mailbox;
mod shared;
mod state;

pub use config::{CorrelatorConfig, RequestCode, DEFAULT_NAMESPACE, DEFAULT_REQUEST_CODE};
pub use correlator::ShareResultCorrelator;
pub use error::{
    ConfigError, DispatchError, LaunchError, ShareError, CONCURRENT_SHARE_ERROR,
    CONCURRENT_SHARE_MESSAGE, SHARE_FAILED,
};
pub use handle::{result_channel, CompletionHandle, ResultSender, ShareResult};
pub use host::{ActivityResultListener, Host, HostEvent};
pub use launch::{ChooserLauncher, LaunchOutcome};
pub use mailbox::ResultMailbox;
pub use state::Phase;
