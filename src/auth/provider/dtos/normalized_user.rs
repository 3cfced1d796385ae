use serde::Serialize;

use crate::auth::xbox::RawProfile;

/// Common result from authentication - the authenticated user's identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedUser {
    /// The provider's stable user id (XUID)
    pub id: String,
    /// The user's display name
    pub nickname: String,
    /// The user's profile picture URL
    pub avatar: String,
    /// Everything fetched from the provider
    pub raw: RawProfile,
}
