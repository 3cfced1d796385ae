//! Xbox Live profile response DTOs

use serde::Deserialize;

/// Response from Xbox Live profile endpoint
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileResponse {
    #[serde(default, deserialize_with = "super::lenient")]
    pub profile_users: Option<Vec<ProfileUser>>,
}

/// Individual user profile
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileUser {
    #[serde(default, deserialize_with = "super::lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub settings: Option<Vec<Setting>>,
}

/// Profile setting key-value pair
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Setting {
    #[serde(default, deserialize_with = "super::lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub value: Option<String>,
}
