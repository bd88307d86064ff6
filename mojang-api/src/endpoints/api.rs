//! Account and profile API endpoints.

use std::fmt;

use mojang_core::constants::API_BASE_URL;

use crate::endpoint::{EndpointSet, Endpoints, Service};

/// Endpoints of `api.mojang.com`.
///
/// Several skin endpoints share a path and differ only by HTTP method
/// (`ChangeSkin` is POST, `UploadSkin` is PUT, `ResetSkin` is DELETE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiEndpoint {
    /// Username to UUID, optionally at a point in time (`?at=`).
    UuidAtTime,
    /// Every name a profile has had.
    NameHistory,
    /// Batch username to UUID lookup (POST, array body).
    PlayernamesToUuids,
    ChangeName,
    ChangeSkin,
    UploadSkin,
    ResetSkin,
    /// Sales statistics (POST).
    Statistics,
    /// Authenticated account info.
    UserInfo,
    SecurityLocation,
    SecurityChallenges,
}

impl Service for ApiEndpoint {
    const ALL: &'static [Self] = &[
        Self::UuidAtTime,
        Self::NameHistory,
        Self::PlayernamesToUuids,
        Self::ChangeName,
        Self::ChangeSkin,
        Self::UploadSkin,
        Self::ResetSkin,
        Self::Statistics,
        Self::UserInfo,
        Self::SecurityLocation,
        Self::SecurityChallenges,
    ];
    const DEFAULT_BASE_URL: &'static str = API_BASE_URL;

    fn name(self) -> &'static str {
        match self {
            Self::UuidAtTime => "UuidAtTime",
            Self::NameHistory => "NameHistory",
            Self::PlayernamesToUuids => "PlayernamesToUuids",
            Self::ChangeName => "ChangeName",
            Self::ChangeSkin => "ChangeSkin",
            Self::UploadSkin => "UploadSkin",
            Self::ResetSkin => "ResetSkin",
            Self::Statistics => "Statistics",
            Self::UserInfo => "UserInfo",
            Self::SecurityLocation => "SecurityLocation",
            Self::SecurityChallenges => "SecurityChallenges",
        }
    }

    fn relative_path(self) -> &'static str {
        match self {
            Self::UuidAtTime => "/users/profiles/minecraft/{username}",
            Self::NameHistory => "/user/profiles/{uuid}/names",
            Self::PlayernamesToUuids => "/profiles/minecraft",
            Self::ChangeName => "/user/profile/{uuid}/name",
            Self::ChangeSkin | Self::UploadSkin | Self::ResetSkin => "/user/profile/{uuid}/skin",
            Self::Statistics => "/orders/statistics",
            Self::UserInfo => "/user",
            Self::SecurityLocation => "/user/security/location",
            Self::SecurityChallenges => "/user/security/challenges",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn select(endpoints: &Endpoints) -> &EndpointSet<Self> {
        &endpoints.api
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, member) in ApiEndpoint::ALL.iter().enumerate() {
            assert_eq!(member.index(), i);
        }
    }

    #[test]
    fn test_skin_endpoints_share_a_path() {
        assert_eq!(ApiEndpoint::ChangeSkin.url(), ApiEndpoint::ResetSkin.url());
        assert_ne!(ApiEndpoint::ChangeSkin.name(), ApiEndpoint::ResetSkin.name());
    }

    #[test]
    fn test_uuid_at_time_url() {
        let url = ApiEndpoint::UuidAtTime
            .endpoint()
            .url_with(&[("username", "jeb_")])
            .unwrap();
        assert_eq!(url, "https://api.mojang.com/users/profiles/minecraft/jeb_");
    }
}
