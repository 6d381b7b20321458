use std::collections::HashMap;


/// Source of configuration variables, read once at startup.
pub trait Environment {
    /// Returns the value of `key`, or [Option::None] if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads variables from the environment of the running process
pub struct ProcessEnvironment;
impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        let value = std::env::var_os(key)?;
        match value.into_string() {
            Ok(v) => Some(v),
            // Value may be a secret, only the key is logged
            Err(_) => {
                tracing::warn!(key, "ignoring environment variable with non-unicode value");
                None
            }
        }
    }
}

/// Provides variables from memory. Lets callers inject configuration without touching the
/// process environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryEnvironment(HashMap<String, String>);
impl InMemoryEnvironment {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self(vars)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder style setter, mostly useful in tests
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}
impl Environment for InMemoryEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}
impl<K, V> FromIterator<(K, V)> for InMemoryEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self(vars)
    }
}
