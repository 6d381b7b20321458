pub use base_url::{ApiBaseUrl, Routing, API_BASE_URL_VARIABLE};
pub mod base_url;
pub use env::{Environment, InMemoryEnvironment, ProcessEnvironment};
pub mod env;
pub mod err;
pub use routes::ApiRoute;
pub mod routes;


use std::sync::OnceLock;

use err::AlreadyInitializedError;

static API_BASE_URL: OnceLock<ApiBaseUrl> = OnceLock::new();

/// Resolves the process-wide [ApiBaseUrl] from `env`. Call once at startup.
///
/// Returns [AlreadyInitializedError] if the value was already set, either by an earlier call or
/// by a read through [api_base_url]. The earlier value stays in effect.
pub fn initialize(env: &dyn Environment) -> Result<&'static ApiBaseUrl, AlreadyInitializedError> {
    let _span = tracing::info_span!("[ApiConfig(initialize)]").entered();
    let mut newly_set = false;
    let base_url = API_BASE_URL.get_or_init(|| {
        newly_set = true;
        ApiBaseUrl::resolve(env)
    });
    if newly_set {
        tracing::info!(
            api_base_url = %base_url,
            routing = base_url.routing().name(),
            "api base url initialized"
        );
        Ok(base_url)
    } else {
        Err(AlreadyInitializedError::new(base_url.clone()))
    }
}

/// The process-wide [ApiBaseUrl].
///
/// Resolved from the [process environment](ProcessEnvironment) on first access unless
/// [initialize] ran before. Every later call returns the same value.
pub fn api_base_url() -> &'static ApiBaseUrl {
    API_BASE_URL.get_or_init(|| ApiBaseUrl::resolve(&ProcessEnvironment))
}
