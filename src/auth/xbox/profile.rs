use super::dtos::ProfileResponse;
use super::transport::{post, require};
use super::types::{ProfileSetting, RawProfile, XstsToken};
use crate::auth::provider::{AuthError, Stage};
use crate::request::HttpClient;

/// Profile settings requested for the authenticated user, in request order
pub const PROFILE_SETTINGS: [&str; 8] = [
    "GameDisplayName",
    "GameDisplayPicRaw",
    "Gamerscore",
    "Gamertag",
    "AppDisplayName",
    "AppDisplayPicRaw",
    "AccountTier",
    "TenureLevel",
];

/// Batch fetches the profile settings of the XSTS token's user
pub struct ProfileFetcher<'a, H: HttpClient + ?Sized> {
    http: &'a H,
    url: &'a str,
}

impl<'a, H: HttpClient + ?Sized> ProfileFetcher<'a, H> {
    pub fn new(http: &'a H, url: &'a str) -> Self {
        Self { http, url }
    }

    pub async fn fetch(&self, xsts: XstsToken) -> Result<RawProfile, AuthError> {
        let json = serde_json::json!({
            "userIds": [&xsts.xuid],
            "settings": PROFILE_SETTINGS,
        });

        let headers = [
            ("x-xbl-contract-version", "2".to_string()),
            ("Authorization", xsts.authorization_header()),
        ];

        let (response, _): (ProfileResponse, _) =
            post(self.http, Stage::Profile, self.url, &headers, &json).await?;

        let user = response
            .profile_users
            .and_then(|users| users.into_iter().next());
        let user = require(Stage::Profile, "profileUsers", user)?;

        let external_id = require(Stage::Profile, "profileUsers[0].id", user.id)?;
        let settings = require(Stage::Profile, "profileUsers[0].settings", user.settings)?;

        let settings = settings
            .into_iter()
            .enumerate()
            .map(|(i, setting)| -> Result<ProfileSetting, AuthError> {
                Ok(ProfileSetting {
                    id: require(
                        Stage::Profile,
                        &format!("profileUsers[0].settings[{}].id", i),
                        setting.id,
                    )?,
                    value: require(
                        Stage::Profile,
                        &format!("profileUsers[0].settings[{}].value", i),
                        setting.value,
                    )?,
                })
            })
            .collect::<Result<Vec<_>, AuthError>>()?;

        Ok(RawProfile::new(external_id, settings, xsts))
    }
}
