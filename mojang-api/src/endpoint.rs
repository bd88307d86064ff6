//! Endpoint declaration.
//!
//! Each remote service is a closed set of endpoints (a fieldless enum
//! implementing [`Service`]) sharing one base URL. An [`EndpointSet`] binds a
//! base URL to every member of a service once, computing each full URL as
//! `base_url + relative_path` by plain concatenation. The process-wide
//! default registry is built on first use from the default base URLs.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use mojang_core::config::ServicesConfig;
use mojang_core::error::{MjError, MjResult};

use crate::endpoints::{ApiEndpoint, AuthEndpoint, SessionEndpoint, StatusEndpoint};

lazy_static! {
    /// `{name}` segments in a URL template.
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();

    static ref GLOBAL: Endpoints = Endpoints::new(&ServicesConfig::default());
}

/// A named endpoint with its base URL and precomputed full URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    name: &'static str,
    relative_path: &'static str,
    base_url: Arc<str>,
    full_url: String,
}

impl Endpoint {
    /// Create an endpoint. `full_url` is `base_url` followed by `relative_path`,
    /// with no separator handling or encoding.
    pub fn new(
        name: &'static str,
        base_url: impl Into<Arc<str>>,
        relative_path: &'static str,
    ) -> Self {
        let base_url = base_url.into();
        let full_url = format!("{base_url}{relative_path}");
        Self {
            name,
            relative_path,
            base_url,
            full_url,
        }
    }

    /// Fixed identifier of this endpoint.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Path as declared, relative to the base URL.
    pub fn relative_path(&self) -> &'static str {
        self.relative_path
    }

    /// Base URL shared with the other endpoints of the same service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url + relative_path`.
    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    /// Names of the `{placeholder}` segments in the full URL, in order.
    pub fn placeholders(&self) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(&self.full_url)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Fill the `{placeholder}` segments of the full URL.
    ///
    /// Values are inserted verbatim. Extra parameters are ignored; a
    /// placeholder without a value is an error.
    pub fn url_with(&self, params: &[(&str, &str)]) -> MjResult<String> {
        let mut missing: Option<String> = None;
        let url = PLACEHOLDER.replace_all(&self.full_url, |caps: &Captures| {
            let key = &caps[1];
            match params.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => (*value).to_string(),
                None => {
                    missing.get_or_insert_with(|| key.to_string());
                    caps[0].to_string()
                }
            }
        });

        match missing {
            Some(key) => Err(MjError::MissingUrlParam(format!("{key} (endpoint {})", self.name))),
            None => Ok(url.into_owned()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_url)
    }
}

/// A remote service: a closed set of endpoints sharing one base URL.
///
/// Implementors are fieldless enums whose `ALL` lists every variant in
/// declaration order, so that `index()` is the variant's position in `ALL`.
pub trait Service: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every endpoint of the service, in declaration order.
    const ALL: &'static [Self];

    /// Base URL used when none is configured.
    const DEFAULT_BASE_URL: &'static str;

    /// Fixed identifier of the endpoint.
    fn name(self) -> &'static str;

    /// Path appended to the base URL.
    fn relative_path(self) -> &'static str;

    /// Position of this endpoint in `ALL`.
    fn index(self) -> usize;

    /// The set of this service inside a registry.
    fn select(endpoints: &Endpoints) -> &EndpointSet<Self>;

    /// This endpoint in the process-wide default registry.
    fn endpoint(self) -> &'static Endpoint {
        Endpoints::global().get(self)
    }

    /// Full URL in the process-wide default registry.
    fn url(self) -> &'static str {
        self.endpoint().full_url()
    }
}

/// Every endpoint of one service bound to a base URL.
#[derive(Debug, Clone)]
pub struct EndpointSet<S: Service> {
    base_url: Arc<str>,
    endpoints: Vec<Endpoint>,
    _service: PhantomData<S>,
}

impl<S: Service> EndpointSet<S> {
    /// Compute every endpoint of `S` against `base_url`.
    pub fn new(base_url: &str) -> Self {
        debug_assert!(
            S::ALL.iter().enumerate().all(|(i, member)| member.index() == i),
            "{} members are not in declaration order",
            std::any::type_name::<S>()
        );
        let base_url: Arc<str> = Arc::from(base_url);
        let endpoints = S::ALL
            .iter()
            .map(|member| {
                Endpoint::new(member.name(), Arc::clone(&base_url), member.relative_path())
            })
            .collect::<Vec<_>>();
        debug!(base_url = %base_url, count = endpoints.len(), "declared endpoints");
        Self {
            base_url,
            endpoints,
            _service: PhantomData,
        }
    }

    /// Bind the service to its default base URL.
    pub fn with_default_base_url() -> Self {
        Self::new(S::DEFAULT_BASE_URL)
    }

    /// The shared base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The endpoint declared for `member`.
    pub fn get(&self, member: S) -> &Endpoint {
        &self.endpoints[member.index()]
    }

    /// Look up an endpoint by its name.
    pub fn find(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    /// Members and their endpoints, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &Endpoint)> {
        S::ALL.iter().copied().zip(self.endpoints.iter())
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// Endpoint sets of every Mojang service.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub api: EndpointSet<ApiEndpoint>,
    pub session: EndpointSet<SessionEndpoint>,
    pub auth: EndpointSet<AuthEndpoint>,
    pub status: EndpointSet<StatusEndpoint>,
}

impl Endpoints {
    /// Build every service's endpoint set from configured base URLs.
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            api: EndpointSet::new(&config.api),
            session: EndpointSet::new(&config.session_server),
            auth: EndpointSet::new(&config.auth_server),
            status: EndpointSet::new(&config.status),
        }
    }

    /// Registry built from the default base URLs on first use.
    pub fn global() -> &'static Endpoints {
        &GLOBAL
    }

    /// The endpoint for any member of any service.
    pub fn get<S: Service>(&self, member: S) -> &Endpoint {
        S::select(self).get(member)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(&ServicesConfig::default())
    }
}
