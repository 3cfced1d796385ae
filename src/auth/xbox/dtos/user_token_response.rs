//! Xbox Live user authentication response

use serde::Deserialize;

/// Response from `user.auth.xboxlive.com/user/authenticate`
#[derive(Deserialize, Debug)]
pub(crate) struct UserTokenResponse {
    #[serde(rename = "Token", default, deserialize_with = "super::lenient")]
    pub token: Option<String>,
}
