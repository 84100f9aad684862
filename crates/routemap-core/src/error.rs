//! Error types and exit codes for routemap
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown locality, invalid weight, bad map file)

mod macros;

use thiserror::Error;

/// Exit codes for the routemap CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown locality, invalid weight (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a route map
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown locality: {id}")]
    UnknownNode { id: String },

    #[error("invalid distance {weight} between {from} and {to} (must be positive)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("self-loop on {node} is not allowed")]
    SelfLoop { node: String },

    #[error("invalid map file {path}: {reason}")]
    InvalidMap { path: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a locality missing from the map
    pub fn unknown_node(id: impl Into<String>) -> Self {
        RouteError::UnknownNode { id: id.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        RouteError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UsageError(_) | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::UnknownNode { .. }
            | RouteError::InvalidWeight { .. }
            | RouteError::SelfLoop { .. }
            | RouteError::InvalidMap { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::FailedOperation { .. }
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::UnknownNode { .. } => "unknown_node",
            RouteError::InvalidWeight { .. } => "invalid_weight",
            RouteError::SelfLoop { .. } => "self_loop",
            RouteError::InvalidMap { .. } => "invalid_map",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::FailedOperation { .. } => "failed_operation",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routemap operations
pub type Result<T> = std::result::Result<T, RouteError>;
