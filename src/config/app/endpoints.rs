use serde::{Deserialize, Serialize};

fn default_authorize_url() -> String {
    "https://login.live.com/oauth20_authorize.srf".to_string()
}

fn default_token_url() -> String {
    "https://login.live.com/oauth20_token.srf".to_string()
}

fn default_user_token_url() -> String {
    "https://user.auth.xboxlive.com/user/authenticate".to_string()
}

fn default_xsts_url() -> String {
    "https://xsts.auth.xboxlive.com/xsts/authorize".to_string()
}

fn default_profile_url() -> String {
    "https://profile.xboxlive.com/users/batch/profile/settings".to_string()
}

/// Microsoft / Xbox Live endpoint configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationConfigEndpoints {
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_user_token_url")]
    pub user_token_url: String,
    #[serde(default = "default_xsts_url")]
    pub xsts_url: String,
    #[serde(default = "default_profile_url")]
    pub profile_url: String,
}

impl ApplicationConfigEndpoints {
    /// Point every endpoint at `base`, keeping the production paths
    ///
    /// Used to run the whole chain against a local mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            authorize_url: format!("{}/oauth20_authorize.srf", base),
            token_url: format!("{}/oauth20_token.srf", base),
            user_token_url: format!("{}/user/authenticate", base),
            xsts_url: format!("{}/xsts/authorize", base),
            profile_url: format!("{}/users/batch/profile/settings", base),
        }
    }
}

impl Default for ApplicationConfigEndpoints {
    fn default() -> Self {
        Self {
            authorize_url: default_authorize_url(),
            token_url: default_token_url(),
            user_token_url: default_user_token_url(),
            xsts_url: default_xsts_url(),
            profile_url: default_profile_url(),
        }
    }
}
