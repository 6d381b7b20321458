/// API prefixes mounted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiRoute {
    TurnResponse,
    GoogleAuth,
    GoogleCallback,
    GoogleStatus,
    VectorStores,
    Functions,
    ContainerFiles,
}

impl ApiRoute {
    pub const ALL: [ApiRoute; 7] = [
        ApiRoute::TurnResponse,
        ApiRoute::GoogleAuth,
        ApiRoute::GoogleCallback,
        ApiRoute::GoogleStatus,
        ApiRoute::VectorStores,
        ApiRoute::Functions,
        ApiRoute::ContainerFiles,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ApiRoute::TurnResponse => "/api/turn_response",
            ApiRoute::GoogleAuth => "/api/google/auth",
            ApiRoute::GoogleCallback => "/api/google/callback",
            ApiRoute::GoogleStatus => "/api/google/status",
            ApiRoute::VectorStores => "/api/vector_stores",
            ApiRoute::Functions => "/api/functions",
            ApiRoute::ContainerFiles => "/api/container_files",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ApiRoute::TurnResponse => "turn_response",
            ApiRoute::GoogleAuth => "google_auth",
            ApiRoute::GoogleCallback => "google_callback",
            ApiRoute::GoogleStatus => "google_status",
            ApiRoute::VectorStores => "vector_stores",
            ApiRoute::Functions => "functions",
            ApiRoute::ContainerFiles => "container_files",
        }
    }
}
