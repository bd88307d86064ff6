//! Authentication server endpoints.
//!
//! All of these accept a JSON `POST` body; this crate only declares the URLs.

use std::fmt;

use mojang_core::constants::AUTH_SERVER_BASE_URL;

use crate::endpoint::{EndpointSet, Endpoints, Service};

/// Endpoints of `authserver.mojang.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthEndpoint {
    /// Exchange credentials for an access token.
    Authenticate,
    /// Refresh a valid access token.
    Refresh,
    /// Check whether an access token is usable.
    Validate,
    /// Invalidate every access token of an account, using credentials.
    Signout,
    /// Invalidate one access token.
    Invalidate,
}

impl Service for AuthEndpoint {
    const ALL: &'static [Self] = &[
        Self::Authenticate,
        Self::Refresh,
        Self::Validate,
        Self::Signout,
        Self::Invalidate,
    ];
    const DEFAULT_BASE_URL: &'static str = AUTH_SERVER_BASE_URL;

    fn name(self) -> &'static str {
        match self {
            Self::Authenticate => "Authenticate",
            Self::Refresh => "Refresh",
            Self::Validate => "Validate",
            Self::Signout => "Signout",
            Self::Invalidate => "Invalidate",
        }
    }

    fn relative_path(self) -> &'static str {
        match self {
            Self::Authenticate => "/authenticate",
            Self::Refresh => "/refresh",
            Self::Validate => "/validate",
            Self::Signout => "/signout",
            Self::Invalidate => "/invalidate",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn select(endpoints: &Endpoints) -> &EndpointSet<Self> {
        &endpoints.auth
    }
}

impl fmt::Display for AuthEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, member) in AuthEndpoint::ALL.iter().enumerate() {
            assert_eq!(member.index(), i);
        }
    }

    #[test]
    fn test_authenticate_url() {
        assert_eq!(
            AuthEndpoint::Authenticate.url(),
            "https://authserver.mojang.com/authenticate"
        );
    }
}
