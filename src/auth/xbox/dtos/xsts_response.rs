//! XSTS authorization response DTOs

use serde::Deserialize;

/// Response from `xsts.auth.xboxlive.com/xsts/authorize`
#[derive(Deserialize, Debug)]
pub(crate) struct XstsResponse {
    #[serde(rename = "Token", default, deserialize_with = "super::lenient")]
    pub token: Option<String>,
    #[serde(rename = "DisplayClaims", default, deserialize_with = "super::lenient")]
    pub display_claims: Option<DisplayClaims>,
}

/// Display claims containing user info
#[derive(Deserialize, Debug)]
pub(crate) struct DisplayClaims {
    #[serde(default, deserialize_with = "super::lenient")]
    pub xui: Option<Vec<Xui>>,
}

/// Xbox User Info
#[derive(Deserialize, Debug)]
pub(crate) struct Xui {
    #[serde(default, deserialize_with = "super::lenient")]
    pub xid: Option<String>,
    #[serde(rename = "uhs", default, deserialize_with = "super::lenient")]
    pub user_hash: Option<String>,
}
