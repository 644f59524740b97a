use protoyard_types::ValidationIssue;
use std::fmt;
use std::path::PathBuf;

/// Result type for protoyard-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a catalog operation as a whole.
///
/// Problems with an individual project are not errors at this level; the
/// aggregator reports them as rejected projects and carries on.
#[derive(Debug)]
pub enum Error {
    /// Projects root could not be created or read
    RootUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Aggregated index could not be written
    WriteIndex {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Index serialization failed
    Serialize(serde_json::Error),

    /// Core layer error (paths, config, discovery)
    Core(protoyard_core::Error),

    /// File watcher could not be set up
    Watch(notify::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RootUnavailable { path, source } => write!(
                f,
                "Projects root {} is unavailable: {}",
                path.display(),
                source
            ),
            Error::WriteIndex { path, source } => write!(
                f,
                "Failed to write aggregated index {}: {}",
                path.display(),
                source
            ),
            Error::Serialize(err) => write!(f, "Failed to serialize index: {}", err),
            Error::Core(err) => write!(f, "{}", err),
            Error::Watch(err) => write!(f, "Watch error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::RootUnavailable { source, .. } => Some(source),
            Error::WriteIndex { source, .. } => Some(source),
            Error::Serialize(err) => Some(err),
            Error::Core(err) => Some(err),
            Error::Watch(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<protoyard_core::Error> for Error {
    fn from(err: protoyard_core::Error) -> Self {
        Error::Core(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err)
    }
}

impl From<notify::Error> for Error {
    fn from(err: notify::Error) -> Self {
        Error::Watch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Reasons a new project cannot be scaffolded.
#[derive(Debug)]
pub enum ScaffoldError {
    /// Name does not match `^[a-z0-9-]+$`
    InvalidName(String),

    /// Name is reserved by the workspace layout
    ReservedName(String),

    /// A directory with this name already exists
    AlreadyExists(String),

    /// The answers would produce a record the aggregator rejects
    InvalidMetadata(Vec<ValidationIssue>),

    /// Writing the project files failed
    Io(std::io::Error),

    /// Metadata serialization failed
    Serialize(serde_json::Error),
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::InvalidName(_) => write!(
                f,
                "Project name must be lowercase with dashes (e.g., my-project)"
            ),
            ScaffoldError::ReservedName(name) => write!(
                f,
                "\"{}\" is a reserved name. Please choose a different name.",
                name
            ),
            ScaffoldError::AlreadyExists(name) => write!(
                f,
                "Project \"{}\" already exists. Please choose a different name.",
                name
            ),
            ScaffoldError::InvalidMetadata(issues) => {
                let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
                write!(f, "Invalid project metadata: {}", messages.join("; "))
            }
            ScaffoldError::Io(err) => write!(f, "IO error: {}", err),
            ScaffoldError::Serialize(err) => write!(f, "Failed to write metadata: {}", err),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io(err) => Some(err),
            ScaffoldError::Serialize(err) => Some(err),
            ScaffoldError::InvalidName(_)
            | ScaffoldError::ReservedName(_)
            | ScaffoldError::AlreadyExists(_)
            | ScaffoldError::InvalidMetadata(_) => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        ScaffoldError::Io(err)
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        ScaffoldError::Serialize(err)
    }
}
