//! Data Transfer Objects for Xbox Live authentication
//!
//! Every field is optional at the serde level. Presence is checked by the
//! stage that consumes the DTO, so a missing field becomes a
//! `MalformedResponse` naming it rather than an opaque decode error.

mod profile_response;
mod user_token_response;
mod xsts_response;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub(super) use profile_response::ProfileResponse;
pub(super) use user_token_response::UserTokenResponse;
pub(super) use xsts_response::XstsResponse;

/// Decodes a field as `T`, yielding `None` for anything that does not fit
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
