use serde::{Deserialize, Serialize};

fn default_redirect_uri() -> String {
    "http://localhost:8080/callback".to_string()
}

/// Microsoft OAuth2 client configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationConfigOAuth {
    pub client_id: String,
    /// Public clients (e.g. native apps) have no secret
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
}

impl Default for ApplicationConfigOAuth {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: None,
            redirect_uri: default_redirect_uri(),
        }
    }
}
