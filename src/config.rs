use crate::error::ConfigError;

/// Code under which a listener receives host completion events.
pub type RequestCode = u32;

/// Hosts built on fragment activities only accept the lower 16 bits.
pub const DEFAULT_REQUEST_CODE: RequestCode = 0x5873;

pub const DEFAULT_NAMESPACE: &str = "dev.fluttercommunity.plus";

const MAX_REQUEST_CODE: RequestCode = 0xFFFF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelatorConfig {
    pub request_code: RequestCode,
    /// Prefix of the result reported when no chooser could be launched.
    pub namespace: String,
}

impl Default for CorrelatorConfig {
    fn default() -> Self {
        Self {
            request_code: DEFAULT_REQUEST_CODE,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl CorrelatorConfig {
    pub fn with_request_code(mut self, request_code: RequestCode) -> Self {
        self.request_code = request_code;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_code > MAX_REQUEST_CODE {
            return Err(ConfigError::RequestCodeOutOfRange(self.request_code));
        }
        if self.namespace.is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }
        Ok(())
    }

    pub fn unavailable_sentinel(&self) -> String {
        format!("{}/share/unavailable", self.namespace)
    }
}
