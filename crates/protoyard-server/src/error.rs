use std::fmt;

/// Result type for protoyard-server operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Listener could not be bound
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// Server loop stopped with an IO error
    Serve(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bind { addr, source } => write!(f, "Failed to bind {}: {}", addr, source),
            Error::Serve(err) => write!(f, "Server error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Bind { source, .. } => Some(source),
            Error::Serve(err) => Some(err),
        }
    }
}
