//! Session server endpoints.

use std::fmt;

use mojang_core::constants::SESSION_SERVER_BASE_URL;

use crate::endpoint::{EndpointSet, Endpoints, Service};

/// Endpoints of `sessionserver.mojang.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEndpoint {
    /// Profile with skin/cape textures. Takes `{uuid}` without dashes.
    Profile,
    /// SHA-1 hashes of blocked server addresses (plain text body).
    BlockedServers,
}

impl Service for SessionEndpoint {
    const ALL: &'static [Self] = &[Self::Profile, Self::BlockedServers];
    const DEFAULT_BASE_URL: &'static str = SESSION_SERVER_BASE_URL;

    fn name(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::BlockedServers => "BlockedServers",
        }
    }

    fn relative_path(self) -> &'static str {
        match self {
            Self::Profile => "/session/minecraft/profile/{uuid}",
            Self::BlockedServers => "/blockedservers",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn select(endpoints: &Endpoints) -> &EndpointSet<Self> {
        &endpoints.session
    }
}

impl fmt::Display for SessionEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}
