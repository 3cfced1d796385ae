use super::types::RawProfile;
use crate::auth::provider::NormalizedUser;

const NICKNAME_KEY: &str = "GameDisplayName";
const AVATAR_KEY: &str = "GameDisplayPicRaw";

/// Projects a raw Xbox Live profile onto the normalized identity
///
/// A missing display name or picture maps to an empty string.
pub struct ProfileMapper;

impl ProfileMapper {
    pub fn map(raw: RawProfile) -> NormalizedUser {
        let id = raw.external_id().to_string();
        let nickname = raw.get(NICKNAME_KEY).unwrap_or_default().to_string();
        let avatar = raw.get(AVATAR_KEY).unwrap_or_default().to_string();

        NormalizedUser {
            id,
            nickname,
            avatar,
            raw,
        }
    }
}
