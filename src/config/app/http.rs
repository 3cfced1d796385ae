use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_secs() -> u64 {
    30
}

/// Outbound HTTP configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationConfigHttp {
    /// Per-request timeout, applied to every hop
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApplicationConfigHttp {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApplicationConfigHttp {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}
