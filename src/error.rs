//! Error types for wayfind
//!
//! A search that cannot reach its target is not an error: it yields `Ok(None)`.
//! Errors are reserved for calls that cannot run at all (absent vertices,
//! weights that break the shortest-path precondition) and for configuration I/O.

mod macros;

use thiserror::Error;

/// Errors that can occur during graph search and configuration handling
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    #[error("invalid edge weight {weight} from {from} to {to} (weights must be finite and non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("internal search error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an argument that is absent from the graph
    pub fn invalid_argument(context: &str, value: impl std::fmt::Debug) -> Self {
        GraphError::InvalidArgument {
            context: context.to_string(),
            value: format!("{:?}", value),
        }
    }

    /// Create an error for an edge weight that violates the non-negative precondition
    pub fn invalid_weight(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        weight: f64,
    ) -> Self {
        GraphError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Create an error for a broken search invariant; reaching one is a bug in this crate
    pub fn internal(message: impl Into<String>) -> Self {
        GraphError::Internal(message.into())
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidArgument { .. } => "invalid_argument",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Internal(_) => "internal",
            GraphError::Other(_) => "other",
        }
    }

    /// Whether the error was caused by the caller's arguments rather than the environment
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidArgument { .. } | GraphError::InvalidWeight { .. }
        )
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::InvalidWeight { from, to, weight } = self {
            error_obj["edge"] = serde_json::json!({
                "from": from,
                "to": to,
                "weight": weight,
            });
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, GraphError>;
