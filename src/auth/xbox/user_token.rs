use super::dtos::UserTokenResponse;
use super::transport::{post, require};
use super::types::UserToken;
use crate::auth::oauth::AccessToken;
use crate::auth::provider::{AuthError, Stage};
use crate::request::HttpClient;

/// Exchanges a Microsoft access token for an Xbox Live user token
pub struct UserTokenFetcher<'a, H: HttpClient + ?Sized> {
    http: &'a H,
    url: &'a str,
}

impl<'a, H: HttpClient + ?Sized> UserTokenFetcher<'a, H> {
    pub fn new(http: &'a H, url: &'a str) -> Self {
        Self { http, url }
    }

    pub async fn fetch(&self, access_token: AccessToken) -> Result<UserToken, AuthError> {
        let json = serde_json::json!({
            "RelyingParty": "http://auth.xboxlive.com",
            "TokenType": "JWT",
            "Properties": {
                "AuthMethod": "RPS",
                "SiteName": "user.auth.xboxlive.com",
                "RpsTicket": format!("d={}", access_token.secret()),
            }
        });

        let headers = [("x-xbl-contract-version", "1".to_string())];

        let (response, _): (UserTokenResponse, _) =
            post(self.http, Stage::UserToken, self.url, &headers, &json).await?;

        let token = require(Stage::UserToken, "Token", response.token)?;

        Ok(UserToken { token })
    }
}
