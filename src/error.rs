//! Error types for mediameta.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during metadata extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not exist after resolution.
    #[error("path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// The current working directory could not be resolved.
    #[error("working directory unavailable: {0}")]
    EnvironmentUnavailable(#[source] std::io::Error),

    /// The external tool is not installed on the search path.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// The external tool process could not be started.
    #[error("failed to launch {tool}: {source}")]
    LaunchFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool exited with failure, or waiting on it failed.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// A requested field is absent from the parsed mapping.
    #[error("unknown field: {name}")]
    UnknownField { name: String },

    /// None of the known timestamp fields are present.
    #[error("no timestamp field found")]
    TimestampMissing,

    /// A timestamp field was present but matched no known format.
    #[error("unrecognized timestamp format: {value}")]
    TimestampFormat { value: String },

    /// An I/O error occurred while reading tool output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a path not found error.
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a launch failed error.
    pub fn launch_failed(tool: impl Into<String>, source: std::io::Error) -> Self {
        Self::LaunchFailed {
            tool: tool.into(),
            source,
        }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create an unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }
}
