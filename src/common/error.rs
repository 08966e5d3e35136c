use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickstandError {
    #[error("Repository with ID {id} not found")]
    RepositoryNotFound { id: String },

    #[error("Invalid git repository at path: {}", path.display())]
    InvalidRepository { path: PathBuf },

    #[error("Repository already exists for path: {}", path.display())]
    RepositoryExists { path: PathBuf },

    #[error("Standup with ID {id} not found")]
    StandupNotFound { id: String },

    #[error("Standup already exists with name: {name}")]
    StandupExists { name: String },

    #[error("{message}: {source}")]
    IoError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl QuickstandError {
    pub fn repository_not_found(id: impl Into<String>) -> Self {
        Self::RepositoryNotFound { id: id.into() }
    }

    pub fn invalid_repository(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRepository { path: path.into() }
    }

    pub fn repository_exists(path: impl Into<PathBuf>) -> Self {
        Self::RepositoryExists { path: path.into() }
    }

    pub fn standup_not_found(id: impl Into<String>) -> Self {
        Self::StandupNotFound { id: id.into() }
    }

    /// Raised when no id was given and no default standup can be resolved.
    pub fn default_standup_not_found() -> Self {
        Self::standup_not_found("default")
    }

    pub fn standup_exists(name: impl Into<String>) -> Self {
        Self::StandupExists { name: name.into() }
    }

    pub fn io_error(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            message: message.into(),
            path,
            source,
        }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Whether this is one of the domain validation failures
    /// (not found / already exists / invalid repository).
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::RepositoryNotFound { .. }
                | Self::InvalidRepository { .. }
                | Self::RepositoryExists { .. }
                | Self::StandupNotFound { .. }
                | Self::StandupExists { .. }
        )
    }
}

impl From<std::io::Error> for QuickstandError {
    fn from(error: std::io::Error) -> Self {
        Self::io_error("File system operation failed", None, error)
    }
}

impl From<serde_json::Error> for QuickstandError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}
