use std::fmt;
use std::path::PathBuf;

/// Result type for markstale-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or running a scan
#[derive(Debug)]
pub enum Error {
    /// Invalid scan configuration (days, suffix, root)
    Config(String),

    /// Listing a directory or reading a marker timestamp failed
    Traversal {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO operation failed outside of traversal (e.g. writing a report)
    Io(std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Traversal {
            path: path.into(),
            source,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::Traversal { .. } | Error::Io(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Traversal { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Traversal { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        Error::Traversal { path, source }
    }
}
