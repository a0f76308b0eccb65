use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum EnvarsError {
    Io(io::Error),
    SerdeJson(serde_json::Error),
    FileNotFound(String),
    InvalidName(String),
    Parse(String),
}

impl fmt::Display for EnvarsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EnvarsError::Io(e) => write!(f, "IO error: {}", e),
            EnvarsError::SerdeJson(e) => write!(f, "JSON serialization error: {}", e),
            EnvarsError::FileNotFound(path) => write!(f, "File not found: {}", path),
            EnvarsError::InvalidName(msg) => write!(f, "Invalid name: {}", msg),
            EnvarsError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl Error for EnvarsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EnvarsError::Io(e) => Some(e),
            EnvarsError::SerdeJson(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EnvarsError {
    fn from(error: io::Error) -> Self {
        EnvarsError::Io(error)
    }
}

impl From<serde_json::Error> for EnvarsError {
    fn from(error: serde_json::Error) -> Self {
        EnvarsError::SerdeJson(error)
    }
}
