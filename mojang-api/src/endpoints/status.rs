//! Service status endpoint.

use std::fmt;

use mojang_core::constants::STATUS_BASE_URL;

use crate::endpoint::{EndpointSet, Endpoints, Service};

/// Endpoints of `status.mojang.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEndpoint {
    /// Status of every Mojang service, as an array of single-key objects.
    Check,
}

impl Service for StatusEndpoint {
    const ALL: &'static [Self] = &[Self::Check];
    const DEFAULT_BASE_URL: &'static str = STATUS_BASE_URL;

    fn name(self) -> &'static str {
        match self {
            Self::Check => "Check",
        }
    }

    fn relative_path(self) -> &'static str {
        match self {
            Self::Check => "/check",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn select(endpoints: &Endpoints) -> &EndpointSet<Self> {
        &endpoints.status
    }
}

impl fmt::Display for StatusEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, member) in StatusEndpoint::ALL.iter().enumerate() {
            assert_eq!(member.index(), i);
        }
    }

    #[test]
    fn test_check_url() {
        assert_eq!(StatusEndpoint::Check.to_string(), "https://status.mojang.com/check");
    }
}
