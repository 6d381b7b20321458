use std::{error::Error, fmt::Display};

use crate::ApiBaseUrl;

/// Return this error when the process-wide [ApiBaseUrl] is assigned a second time.
///
/// The value that stays in effect is available through [Self::current]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlreadyInitializedError {
    current: ApiBaseUrl,
}

impl AlreadyInitializedError {
    pub fn new(current: ApiBaseUrl) -> Self {
        Self { current }
    }

    pub fn current(&self) -> &ApiBaseUrl {
        &self.current
    }
}

impl Error for AlreadyInitializedError {}
impl Display for AlreadyInitializedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "API base url was already initialized to '{}'",
            self.current
        )
    }
}
