//! Microsoft OAuth2 code exchange
//!
//! The Xbox Live pipeline starts from a Microsoft access token. How that token
//! is obtained is behind [`CodeExchanger`], so the rest of the chain can be
//! exercised with a fake. [`LiveCodeExchanger`] talks to `login.live.com`.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use super::provider::{AuthError, Stage};
use crate::config::ApplicationConfigOAuth;

/// Unique provider identifier
pub const IDENTIFIER: &str = "XBOX";

/// Scopes requested from Microsoft
pub const SCOPES: [&str; 2] = ["Xboxlive.signin", "Xboxlive.offline_access"];

const SCOPE_SEPARATOR: &str = " ";

/// Extra parameters sent with the authorization request
pub const AUTHORIZATION_PARAMS: [(&str, &str); 2] =
    [("response_type", "code"), ("approval_prompt", "auto")];

/// Microsoft OAuth2 access token
///
/// Opaque; only valid for a single authentication attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Exchanges an OAuth2 authorization code for an access token
#[async_trait]
pub trait CodeExchanger: Send + Sync {
    async fn exchange(&self, code: &str) -> Result<AccessToken, AuthError>;
}

/// The space separated scope string
pub fn scope_string() -> String {
    SCOPES.join(SCOPE_SEPARATOR)
}

/// Form fields for the token request
pub fn token_fields(oauth: &ApplicationConfigOAuth, code: &str) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("client_id", oauth.client_id.clone()),
        ("code", code.to_string()),
        ("redirect_uri", oauth.redirect_uri.clone()),
    ];

    if let Some(secret) = &oauth.client_secret {
        fields.push(("client_secret", secret.clone()));
    }

    fields.push(("grant_type", "authorization_code".to_string()));
    fields.push(("scope", scope_string()));
    fields.push(("response_type", "code".to_string()));
    fields
}

/// Builds the URL the user is redirected to for consent
pub fn authorize_url(
    oauth: &ApplicationConfigOAuth,
    base: &str,
    state: &str,
) -> Result<Url, anyhow::Error> {
    let mut url = Url::parse(base)?;

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("client_id", &oauth.client_id)
            .append_pair("redirect_uri", &oauth.redirect_uri)
            .append_pair("scope", &scope_string())
            .append_pair("state", state);
        for (key, value) in AUTHORIZATION_PARAMS {
            query.append_pair(key, value);
        }
    }

    Ok(url)
}

/// [`CodeExchanger`] against the Microsoft token endpoint
#[derive(Debug, Clone)]
pub struct LiveCodeExchanger {
    client: reqwest::Client,
    oauth: ApplicationConfigOAuth,
    token_url: String,
}

impl LiveCodeExchanger {
    pub fn new(client: reqwest::Client, oauth: ApplicationConfigOAuth, token_url: String) -> Self {
        Self {
            client,
            oauth,
            token_url,
        }
    }
}

#[async_trait]
impl CodeExchanger for LiveCodeExchanger {
    async fn exchange(&self, code: &str) -> Result<AccessToken, AuthError> {
        let response = self
            .client
            .post(&self.token_url)
            .form(&token_fields(&self.oauth, code))
            .send()
            .await
            .map_err(|e| AuthError::transport(Stage::CodeExchange, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::transport(Stage::CodeExchange, e.to_string()))?;

        if !status.is_success() {
            tracing::error!("Token exchange failed ({}): {}", status, body);
            return Err(AuthError::upstream(
                Stage::CodeExchange,
                status.as_u16(),
                body,
            ));
        }

        let token: AccessTokenResponse = serde_json::from_str(&body)
            .map_err(|_| AuthError::malformed(Stage::CodeExchange, "body"))?;

        match token.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
            _ => {
                tracing::warn!("Token exchange response carried no access_token");
                Err(AuthError::malformed(Stage::CodeExchange, "access_token"))
            }
        }
    }
}

/// Response from Microsoft OAuth token endpoint
#[derive(Deserialize)]
struct AccessTokenResponse {
    #[serde(default, deserialize_with = "super::xbox::lenient")]
    access_token: Option<String>,
}
