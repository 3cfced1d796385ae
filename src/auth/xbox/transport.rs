use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::auth::provider::{AuthError, Stage};
use crate::request::HttpClient;

/// Posts `body` and decodes a successful response as `T`
///
/// Returns the DTO together with the decoded JSON document.
pub(super) async fn post<H, T>(
    http: &H,
    stage: Stage,
    url: &str,
    headers: &[(&'static str, String)],
    body: &Value,
) -> Result<(T, Value), AuthError>
where
    H: HttpClient + ?Sized,
    T: DeserializeOwned,
{
    let response = http.post_json(url, headers, body).await.map_err(|e| {
        tracing::error!("{} request to {} failed: {}", stage, url, e);
        AuthError::transport(stage, e.to_string())
    })?;

    if !response.is_success() {
        tracing::error!(
            "{} request failed ({}): {}",
            stage,
            response.status,
            response.body
        );
        return Err(AuthError::upstream(stage, response.status, response.body));
    }

    let document: Value = match serde_json::from_str(&response.body) {
        Ok(document @ Value::Object(_)) => document,
        _ => {
            tracing::warn!("{} response is not a JSON object", stage);
            return Err(AuthError::malformed(stage, "body"));
        }
    };

    let dto = T::deserialize(&document).map_err(|e| {
        tracing::warn!("{} response could not be decoded: {}", stage, e);
        AuthError::malformed(stage, "body")
    })?;

    Ok((dto, document))
}

/// Turns an absent required field into a `MalformedResponse`
pub(super) fn require<T>(stage: Stage, field: &str, value: Option<T>) -> Result<T, AuthError> {
    value.ok_or_else(|| {
        tracing::warn!("{} response is missing `{}`", stage, field);
        AuthError::malformed(stage, field)
    })
}
