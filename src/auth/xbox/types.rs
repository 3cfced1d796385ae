//! Values passed between the stages of the Xbox Live pipeline
//!
//! Each token is produced by exactly one stage and moved into the next one.

use std::collections::BTreeMap;

use serde::Serialize;

/// Key under which the XUID is exposed in a [`RawProfile`]
pub const EXTERNAL_ID_KEY: &str = "externalId";

/// Xbox Live user token obtained from the RPS ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserToken {
    pub token: String,
}

/// XSTS token scoped to `http://xboxlive.com`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XstsToken {
    pub token: String,
    pub user_hash: String,
    pub xuid: String,
    /// The decoded XSTS response, verbatim
    pub response: serde_json::Value,
}

impl XstsToken {
    /// The `Authorization` header value for Xbox Live service calls
    pub fn authorization_header(&self) -> String {
        format!("XBL3.0 x={};{}", self.user_hash, self.token)
    }
}

/// One named profile attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSetting {
    pub id: String,
    pub value: String,
}

/// Flattened profile settings of a single user
///
/// Serializes as a flat object of setting id to value, plus `externalId`.
/// The XSTS token is attached for callers that make further Xbox Live calls,
/// but is not part of the mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawProfile {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
    #[serde(skip)]
    external_id: String,
    #[serde(skip)]
    xsts_token: XstsToken,
}

impl RawProfile {
    /// Folds the settings into a mapping; later duplicates overwrite earlier ones
    pub fn new<I>(external_id: String, settings: I, xsts_token: XstsToken) -> Self
    where
        I: IntoIterator<Item = ProfileSetting>,
    {
        let fields = settings
            .into_iter()
            .map(|setting| (setting.id, setting.value))
            .chain(std::iter::once((
                EXTERNAL_ID_KEY.to_string(),
                external_id.clone(),
            )))
            .collect();

        Self {
            fields,
            external_id,
            xsts_token,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn xsts_token(&self) -> &XstsToken {
        &self.xsts_token
    }
}
