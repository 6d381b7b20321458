use std::{
    error::Error,
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

use apiconfig::Environment;

use crate::files::FileReader;

/// A parsed TOML secrets file
#[derive(Debug, Clone, PartialEq)]
pub struct SecretsFile {
    path: PathBuf,
    table: toml::Table,
}

impl SecretsFile {
    pub fn from_toml(path: impl Into<PathBuf>, toml: &str) -> Result<Self, SecretsError> {
        let path = path.into();
        match toml::from_str::<toml::Table>(toml) {
            Ok(table) => Ok(Self { path, table }),
            Err(e) => Err(SecretsError::Parse {
                path,
                message: e.message().to_string(),
            }),
        }
    }

    /// Reads and parses the file at `path`. A missing file is not an error and returns
    /// [Option::None].
    pub fn load(path: &Path, reader: &dyn FileReader) -> Result<Option<Self>, SecretsError> {
        let content = match reader.read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no secrets file");
                return Ok(None);
            }
            Err(e) => {
                return Err(SecretsError::Io {
                    path: path.to_path_buf(),
                    kind: e.kind(),
                })
            }
        };
        let file = Self::from_toml(path, &content)?;
        tracing::debug!(path = %path.display(), keys = file.table.len(), "loaded secrets file");
        Ok(Some(file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up `key` at the top level first. Keys containing dots fall back to walking nested
    /// tables, so `google.client_id` finds `[google] client_id = ...`.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.table.get(key) {
            return scalar(value);
        }
        if !key.contains('.') {
            return None;
        }
        let mut parts = key.split('.');
        let mut value = self.table.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        scalar(value)
    }
}

/// Renders scalar values as strings. Strings are returned verbatim, tables and arrays are not
/// values.
fn scalar(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Table(_) | toml::Value::Array(_) => None,
        v => Some(v.to_string()),
    }
}

/// Layered lookup: secrets files in the given order, then the environment
pub struct SecretSources<'a> {
    files: Vec<SecretsFile>,
    env: &'a dyn Environment,
}

impl<'a> SecretSources<'a> {
    pub fn new(files: Vec<SecretsFile>, env: &'a dyn Environment) -> Self {
        Self { files, env }
    }

    pub fn files(&self) -> &[SecretsFile] {
        &self.files
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.files
            .iter()
            .find_map(|f| f.get(key))
            .or_else(|| self.env.var(key))
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// First of `keys` with a non-empty value
    pub fn first_non_empty(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|k| self.get(k))
            .find(|v| !v.is_empty())
    }
}

/// Return this error when a secrets file exists but cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretsError {
    Io { path: PathBuf, kind: io::ErrorKind },
    Parse { path: PathBuf, message: String },
}

impl SecretsError {
    pub fn path(&self) -> &Path {
        match self {
            SecretsError::Io { path, .. } => path,
            SecretsError::Parse { path, .. } => path,
        }
    }
}

impl Error for SecretsError {}
impl Display for SecretsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretsError::Io { path, kind } => {
                write!(f, "Failed to read secrets file '{}': {kind}", path.display())
            }
            SecretsError::Parse { path, message } => {
                write!(
                    f,
                    "Failed to parse secrets file '{}': {}",
                    path.display(),
                    message.trim_end()
                )
            }
        }
    }
}
