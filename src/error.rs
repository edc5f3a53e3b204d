use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Request failed: {0}")]
    #[diagnostic(code(brody::request))]
    Request(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(brody::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(brody::config))]
    Config(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(brody::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(brody::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(brody::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(brody::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BrodyResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str, message: &str) -> Error {
    Error::Environment(format!("{}: {}", var, message))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create request errors
pub fn request_error(message: &str) -> Error {
    Error::Request(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
