use std::fmt::Display;

use crate::env::Environment;
use crate::routes::ApiRoute;


/// Name of the environment variable holding the external backend origin
pub const API_BASE_URL_VARIABLE: &str = "NEXT_PUBLIC_API_URL";

/// Origin prefix for outgoing API requests.
///
/// Either the value of [API_BASE_URL_VARIABLE] exactly as it was set, or an empty string
/// meaning requests go to relative paths on the current host (see [Routing::SameOrigin]).
/// The value is never parsed or normalized, so a malformed url is passed through as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Reads [API_BASE_URL_VARIABLE] from `env`. Unset and empty both resolve to the empty
    /// base url.
    pub fn resolve(env: &dyn Environment) -> Self {
        let base_url = Self::from_value(env.var(API_BASE_URL_VARIABLE));
        match base_url.routing() {
            Routing::External(url) => tracing::debug!(url, "using external api backend"),
            Routing::SameOrigin => {
                tracing::debug!("no api backend configured, using same-origin routes")
            }
        }
        base_url
    }

    /// Applies the fallback rule to an already read value
    pub fn from_value(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self(v),
            _ => Self(String::new()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_same_origin(&self) -> bool {
        self.0.is_empty()
    }

    pub fn routing(&self) -> Routing<'_> {
        if self.is_same_origin() {
            Routing::SameOrigin
        } else {
            Routing::External(&self.0)
        }
    }

    /// Prefixes `path` with the base url. Plain concatenation; callers pass paths with a
    /// leading slash. Without a base url the path stays relative.
    pub fn endpoint(&self, path: &str) -> String {
        match self.routing() {
            Routing::External(base) => format!("{base}{path}"),
            Routing::SameOrigin => path.to_string(),
        }
    }

    /// [Self::endpoint] for one of the backend's mounted [routes](ApiRoute)
    pub fn route(&self, route: ApiRoute) -> String {
        self.endpoint(route.path())
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for ApiBaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where API requests are sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing<'a> {
    /// External backend at the given origin
    External(&'a str),
    /// Relative routes on the current host
    SameOrigin,
}

impl Routing<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Routing::External(_) => "external",
            Routing::SameOrigin => "same-origin",
        }
    }
}
