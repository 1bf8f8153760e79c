//! Error types for IDM Console
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the console
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// A view, wizard or config value that cannot be evaluated
    #[snafu(display("Invalid configuration: {message}"))]
    InvalidConfiguration { message: String },

    /// Page or step index outside the accepted range
    #[snafu(display("Invalid page index: {index}"))]
    InvalidPageIndex { index: usize },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Transport-level HTTP failure
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// The backend answered with a non-success status
    #[snafu(display("Backend error ({status}): {}", description.as_deref().unwrap_or("no description")))]
    Backend {
        status: u16,
        description: Option<String>,
    },
}

impl Error {
    /// Description reported by the backend, if this error carries one
    pub fn backend_description(&self) -> Option<&str> {
        match self {
            Error::Backend { description, .. } => description.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
