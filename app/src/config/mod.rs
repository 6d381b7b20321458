use std::{fmt::Debug, path::PathBuf};

use apiconfig::{ApiBaseUrl, Environment};

use crate::files::FileReader;

pub mod secrets;

#[cfg(test)]
mod tests;

pub use secrets::{SecretSources, SecretsFile};

pub const PROJECT_SECRETS_FILE: &str = "secrets.toml";
pub const USER_SECRETS_DIR: &str = ".apiconfig";

/// Secrets files in lookup order: the project file (or `project` if given), then the user file
/// in `$HOME`
pub fn secrets_paths(project: Option<PathBuf>, env: &dyn Environment) -> Vec<PathBuf> {
    let mut paths = vec![project.unwrap_or_else(|| PathBuf::from(PROJECT_SECRETS_FILE))];
    match env.var("HOME") {
        Some(home) if !home.is_empty() => {
            paths.push([home.as_str(), USER_SECRETS_DIR, PROJECT_SECRETS_FILE].iter().collect())
        }
        _ => tracing::debug!("HOME not set, skipping user secrets"),
    }
    paths
}

/// Loads every existing file of `paths`. Unreadable or malformed files are skipped.
pub fn load_secrets_files(paths: &[PathBuf], reader: &dyn FileReader) -> Vec<SecretsFile> {
    paths
        .iter()
        .filter_map(|p| match SecretsFile::load(p, reader) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(path = %e.path().display(), "skipping secrets file: {e}");
                None
            }
        })
        .collect()
}

/// Application settings, resolved once at startup
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    api_base_url: ApiBaseUrl,
    openai_api_key: Option<String>,
    google_client_id: Option<String>,
    google_client_secret: Option<String>,
    google_redirect_uri: String,
    node_env: String,
}

impl Settings {
    pub const DEFAULT_GOOGLE_REDIRECT_URI: &'static str = "http://localhost:8501/api/google/callback";
    pub const DEFAULT_NODE_ENV: &'static str = "development";

    /// `api_base_url` comes from the environment alone; everything else goes through the
    /// layered `sources`
    pub fn resolve(api_base_url: ApiBaseUrl, sources: &SecretSources) -> Self {
        let _span = tracing::info_span!("[Settings(resolve)]").entered();
        Self {
            api_base_url,
            openai_api_key: sources.first_non_empty(&["OPENAI_API_KEY", "openai_api_key"]),
            google_client_id: sources.first_non_empty(&["GOOGLE_CLIENT_ID", "google_client_id"]),
            google_client_secret: sources
                .first_non_empty(&["GOOGLE_CLIENT_SECRET", "google_client_secret"]),
            google_redirect_uri: sources
                .get_or("GOOGLE_REDIRECT_URI", Self::DEFAULT_GOOGLE_REDIRECT_URI),
            node_env: sources.get_or("NODE_ENV", Self::DEFAULT_NODE_ENV),
        }
    }

    pub fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref()
    }

    pub fn google_client_id(&self) -> Option<&str> {
        self.google_client_id.as_deref()
    }

    pub fn google_client_secret(&self) -> Option<&str> {
        self.google_client_secret.as_deref()
    }

    pub fn google_redirect_uri(&self) -> &str {
        &self.google_redirect_uri
    }

    pub fn node_env(&self) -> &str {
        &self.node_env
    }

    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }

    /// Logs a warning if no OpenAI key is configured. Returns `true` in that case.
    pub fn warn_on_missing_api_key(&self) -> bool {
        if self.openai_api_key.is_some() {
            return false;
        }
        tracing::warn!(
            "No OPENAI_API_KEY found in secrets or environment, requests to the backend may fail"
        );
        true
    }
}

impl Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Settings")
            .field("api_base_url", &self.api_base_url)
            .field("openai_api_key", &redacted(&self.openai_api_key))
            .field("google_client_id", &self.google_client_id)
            .field("google_client_secret", &redacted(&self.google_client_secret))
            .field("google_redirect_uri", &self.google_redirect_uri)
            .field("node_env", &self.node_env)
            .finish()
    }
}
