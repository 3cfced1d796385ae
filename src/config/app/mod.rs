mod endpoints;
mod http;
mod logger;
mod oauth;

pub use endpoints::ApplicationConfigEndpoints;
pub use http::ApplicationConfigHttp;
pub use logger::ApplicationConfigLogger;
pub use oauth::ApplicationConfigOAuth;

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application Configuration as described in the config.hcl configuration file
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApplicationConfig {
    pub oauth: ApplicationConfigOAuth,
    #[serde(default)]
    pub endpoints: ApplicationConfigEndpoints,
    #[serde(default)]
    pub http: ApplicationConfigHttp,
    #[serde(default)]
    pub log: ApplicationConfigLogger,
}

impl ApplicationConfig {
    /// Parses an HCL document
    pub fn from_hcl_str(source: &str) -> Result<Self, anyhow::Error> {
        let hcl: Value = hcl::from_str(source).map_err(|e| anyhow!("invalid HCL: {}", e))?;
        let config: ApplicationConfig = serde_json::from_value(hcl)?;

        if config.oauth.client_id.is_empty() {
            return Err(anyhow!("oauth.client_id must not be empty"));
        }

        Ok(config)
    }

    /// Reads in the HCL configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("unable to read {}", path.display()))?;

        Self::from_hcl_str(&source)
    }
}
