use apiconfig::{ApiBaseUrl, ApiRoute};
use serde::Serialize;

use crate::config::{SecretsFile, Settings};


/// Startup summary printed by the binary. Secret values never end up in here.
#[derive(Serialize, Debug)]
pub struct Report<'a> {
    api_base_url: &'a ApiBaseUrl,
    routing: &'static str,
    endpoints: serde_json::Map<String, serde_json::Value>,
    node_env: &'a str,
    production: bool,
    google_redirect_uri: &'a str,
    secrets: ConfiguredSecrets,
    secrets_files: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct ConfiguredSecrets {
    openai_api_key: bool,
    google_client_id: bool,
    google_client_secret: bool,
}

impl<'a> Report<'a> {
    pub fn new(settings: &'a Settings, files: &[SecretsFile]) -> Self {
        let base_url = settings.api_base_url();
        let endpoints: serde_json::Map<String, serde_json::Value> = ApiRoute::ALL
            .iter()
            .map(|r| (r.name().to_string(), serde_json::Value::String(base_url.route(*r))))
            .collect();
        Self {
            api_base_url: base_url,
            routing: base_url.routing().name(),
            endpoints,
            node_env: settings.node_env(),
            production: settings.is_production(),
            google_redirect_uri: settings.google_redirect_uri(),
            secrets: ConfiguredSecrets {
                openai_api_key: settings.openai_api_key().is_some(),
                google_client_id: settings.google_client_id().is_some(),
                google_client_secret: settings.google_client_secret().is_some(),
            },
            secrets_files: files
                .iter()
                .map(|f| f.path().display().to_string())
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
