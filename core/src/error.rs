//! Error types and handling for Suraksha Docs Core

use thiserror::Error;

/// Result type alias for Suraksha Docs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Suraksha Docs Core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Page registry construction errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Router errors
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Session errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Page content errors
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Asset resolution errors
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Template expansion errors
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Page registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No pages registered")]
    Empty,

    #[error("Duplicate page name: {name}")]
    DuplicatePage { name: String },

    #[error("Page name must not be empty")]
    EmptyName,
}

/// Router errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Page '{0}' not found")]
    PageNotFound(String),
}

/// Session errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown session: {id}")]
    UnknownSession { id: String },
}

/// Page content errors
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("Unterminated code fence opened at line {line}")]
    UnterminatedFence { line: usize },

    #[error("Malformed directive at line {line}: {text}")]
    MalformedDirective { line: usize, text: String },
}

/// Asset resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Asset not found: {path}")]
    NotFound { path: String },

    #[error("Asset path escapes the assets root: {path}")]
    OutsideRoot { path: String },

    #[error("Invalid animation file {path}: {message}")]
    InvalidAnimation { path: String, message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
