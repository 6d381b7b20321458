
#[cfg(test)]
use std::{collections::HashMap, path::PathBuf};
use std::{fs, io, path::Path};

pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

pub struct FileReaderImpl;
impl FileReader for FileReaderImpl {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Serves file contents from memory. Unknown paths fail with [io::ErrorKind::NotFound]
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryFileReader {
    files: HashMap<PathBuf, io::Result<String>>,
}
#[cfg(test)]
impl InMemoryFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), Ok(content.into()));
        self
    }

    /// Reading `path` fails with `kind`
    pub fn with_error(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.files.insert(path.into(), Err(kind.into()));
        self
    }
}
#[cfg(test)]
impl FileReader for InMemoryFileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.files.get(path) {
            Some(Ok(content)) => Ok(content.clone()),
            Some(Err(e)) => Err(e.kind().into()),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }
}
