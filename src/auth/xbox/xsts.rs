use super::dtos::XstsResponse;
use super::transport::{post, require};
use super::types::{UserToken, XstsToken};
use crate::auth::provider::{AuthError, Stage};
use crate::request::HttpClient;

/// Exchanges a user token for an XSTS token scoped to `http://xboxlive.com`
pub struct XstsTokenFetcher<'a, H: HttpClient + ?Sized> {
    http: &'a H,
    url: &'a str,
}

impl<'a, H: HttpClient + ?Sized> XstsTokenFetcher<'a, H> {
    pub fn new(http: &'a H, url: &'a str) -> Self {
        Self { http, url }
    }

    pub async fn fetch(&self, user_token: UserToken) -> Result<XstsToken, AuthError> {
        let json = serde_json::json!({
            "RelyingParty": "http://xboxlive.com",
            "TokenType": "JWT",
            "Properties": {
                "UserTokens": [user_token.token]
            },
            "SandboxId": "RETAIL"
        });

        let headers = [("x-xbl-contract-version", "1".to_string())];

        let (response, document): (XstsResponse, _) =
            post(self.http, Stage::Xsts, self.url, &headers, &json).await?;

        let xui = response
            .display_claims
            .and_then(|claims| claims.xui)
            .and_then(|xui| xui.into_iter().next());
        let xui = require(Stage::Xsts, "DisplayClaims.xui", xui)?;

        let xuid = require(Stage::Xsts, "DisplayClaims.xui[0].xid", xui.xid)?;
        let user_hash = require(Stage::Xsts, "DisplayClaims.xui[0].uhs", xui.user_hash)?;
        let token = require(Stage::Xsts, "Token", response.token)?;

        Ok(XstsToken {
            token,
            user_hash,
            xuid,
            response: document,
        })
    }
}
