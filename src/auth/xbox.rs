//! Xbox Live authentication via Microsoft OAuth
//!
//! The authentication flow is:
//! 1. Exchange the OAuth authorization code for a Microsoft access token
//! 2. Exchange the access token (as an RPS ticket) for a user token
//! 3. Exchange the user token for an XSTS token
//! 4. Fetch the player's profile settings with the XSTS token
//! 5. Map the profile onto a [`NormalizedUser`]
//!
//! Every hop depends on the previous one, so the stages run strictly in
//! sequence and the first failure ends the attempt. Nothing is cached between
//! attempts and nothing is retried.

mod dtos;
mod mapper;
mod profile;
mod transport;
mod types;
mod user_token;
mod xsts;

pub(crate) use dtos::lenient;
pub use mapper::ProfileMapper;
pub use profile::{ProfileFetcher, PROFILE_SETTINGS};
pub use types::{ProfileSetting, RawProfile, UserToken, XstsToken, EXTERNAL_ID_KEY};
pub use user_token::UserTokenFetcher;
pub use xsts::XstsTokenFetcher;

use super::oauth::{CodeExchanger, LiveCodeExchanger};
use super::provider::{AuthError, NormalizedUser};
use crate::config::{ApplicationConfig, ApplicationConfigEndpoints};
use crate::request::{build_client, HttpClient, ReqwestHttpClient};

// ============================================================================
// Public API
// ============================================================================

/// Xbox Live authentication provider
pub struct XboxAuthProvider<E, H> {
    exchanger: E,
    http: H,
    endpoints: ApplicationConfigEndpoints,
}

impl<E: CodeExchanger, H: HttpClient> XboxAuthProvider<E, H> {
    pub fn new(exchanger: E, http: H, endpoints: ApplicationConfigEndpoints) -> Self {
        Self {
            exchanger,
            http,
            endpoints,
        }
    }

    /// Authenticate a user with an OAuth authorization code
    ///
    /// # Arguments
    /// * `code` - The OAuth authorization code from Microsoft login
    ///
    /// # Returns
    /// * `Ok(NormalizedUser)` - The user's XUID, display name, picture and raw profile
    /// * `Err(AuthError)` - Tagged with the stage that failed
    pub async fn authenticate(&self, code: &str) -> Result<NormalizedUser, AuthError> {
        // Step 1: Exchange code for Microsoft access token
        tracing::debug!("Exchanging authorization code");
        let access_token = self.exchanger.exchange(code).await?;

        // Step 2: Authenticate with Xbox Live
        tracing::debug!("Requesting Xbox Live user token");
        let user_token = UserTokenFetcher::new(&self.http, &self.endpoints.user_token_url)
            .fetch(access_token)
            .await?;

        // Step 3: Get XSTS token
        tracing::debug!("Requesting XSTS token");
        let xsts_token = XstsTokenFetcher::new(&self.http, &self.endpoints.xsts_url)
            .fetch(user_token)
            .await?;

        // Step 4: Get user profile
        tracing::debug!("Fetching profile for XUID {}", xsts_token.xuid);
        let profile = ProfileFetcher::new(&self.http, &self.endpoints.profile_url)
            .fetch(xsts_token)
            .await?;

        let user = ProfileMapper::map(profile);
        tracing::info!("Authenticated Xbox Live user {} ({})", user.nickname, user.id);

        Ok(user)
    }

    pub fn endpoints(&self) -> &ApplicationConfigEndpoints {
        &self.endpoints
    }
}

impl XboxAuthProvider<LiveCodeExchanger, ReqwestHttpClient> {
    /// Create a provider talking to Microsoft and Xbox Live over reqwest
    ///
    /// The code exchange and all Xbox Live hops share one connection pool.
    pub fn from_config(config: &ApplicationConfig) -> Result<Self, anyhow::Error> {
        let client = build_client(config.http.timeout())?;

        Ok(Self::new(
            LiveCodeExchanger::new(
                client.clone(),
                config.oauth.clone(),
                config.endpoints.token_url.clone(),
            ),
            ReqwestHttpClient::from_client(client),
            config.endpoints.clone(),
        ))
    }
}
