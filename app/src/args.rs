use std::{error::Error, fmt::Display, path::PathBuf};


pub const USAGE: &str = "usage: apiconfig [SECRETS_FILE]";

/// Parses the optional single positional argument: path of the project secrets file
pub fn parse_args(args: &[String]) -> Result<Option<PathBuf>, UsageError> {
    match args {
        [] => Ok(None),
        [flag] if flag.starts_with('-') => Err(UsageError::UnknownOption(flag.clone())),
        [path] => Ok(Some(PathBuf::from(path))),
        _ => Err(UsageError::TooManyArguments(args.len())),
    }
}

/// Return this error when the command line does not match [USAGE]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    UnknownOption(String),
    TooManyArguments(usize),
}

impl Error for UsageError {}
impl Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageError::UnknownOption(option) => write!(f, "unknown option '{option}'")?,
            UsageError::TooManyArguments(count) => {
                write!(f, "expected at most one argument, got {count}")?
            }
        }
        write!(f, "\n{USAGE}")
    }
}
