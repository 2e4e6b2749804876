//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lintrc operations
#[derive(Debug, Error)]
pub enum LintrcError {
    /// Invalid configuration values or structure
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Syntax errors in a configuration file
    #[error("Failed to parse '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `extends` names a preset nobody registered
    #[error("Unknown preset '{name}' in extends")]
    UnknownPreset { name: String },

    /// `env` names an environment outside the catalogue
    #[error("Unknown environment '{name}'")]
    UnknownEnvironment { name: String },

    /// A configuration file extends itself, directly or through others
    #[error("Circular extends: {chain}")]
    CircularExtends { chain: String },

    /// A rule setting that cannot be accepted
    #[error("Invalid rule '{rule_id}': {message}")]
    InvalidRule { rule_id: String, message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Parse,
    Io,
    Preset,
    Environment,
    Extends,
    Rule,
}

impl LintrcError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LintrcError::ConfigError { .. } => ErrorKind::Config,
            LintrcError::ParseError { .. } => ErrorKind::Parse,
            LintrcError::IoError { .. } => ErrorKind::Io,
            LintrcError::UnknownPreset { .. } => ErrorKind::Preset,
            LintrcError::UnknownEnvironment { .. } => ErrorKind::Environment,
            LintrcError::CircularExtends { .. } => ErrorKind::Extends,
            LintrcError::InvalidRule { .. } => ErrorKind::Rule,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a parse error for a file
    pub fn parse_error(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create an IO error for a path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}
