//! Error types for the Mirepoix agent framework.

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error types for agent operations
#[derive(Error, Debug)]
pub enum AgentError {
    /// Configuration errors (missing credentials, bad setup)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// The model requested a tool that is not registered.
    ///
    /// Fatal for the current query: the loop stops without retrying.
    #[error("Unknown tool: {name}: {input}")]
    UnknownTool {
        /// Requested tool name
        name: String,
        /// Raw input the model supplied for the tool
        input: String,
    },

    /// Completion-call failures from the model backend
    #[error("Model error: {message}")]
    Model {
        /// Error message
        message: String,
    },

    /// Tool-related errors
    #[error("Tool error: {tool_name} - {message}")]
    Tool {
        /// Tool name
        tool_name: String,
        /// Error message
        message: String,
    },

    /// HTTP transport errors from tool backends
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgentError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown-tool error
    pub fn unknown_tool(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self::UnknownTool {
            name: name.into(),
            input: input.into(),
        }
    }

    /// Create a model error
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model {
            message: message.into(),
        }
    }

    /// Create a tool error
    pub fn tool(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tool {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration",
            Self::UnknownTool { .. } => "unknown_tool",
            Self::Model { .. } => "model",
            Self::Tool { .. } => "tool",
            Self::Http(_) => "http",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = AgentError::configuration("missing key");
        assert!(matches!(err, AgentError::Configuration { .. }));
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn test_unknown_tool_display() {
        let err = AgentError::unknown_tool("order_pizza", "pepperoni");
        let display = format!("{err}");
        assert!(display.contains("order_pizza"));
        assert!(display.contains("pepperoni"));
    }

    #[test]
    fn test_tool_error_display() {
        let err = AgentError::tool("search_recipes", "backend unreachable");
        let display = format!("{err}");
        assert!(display.contains("search_recipes"));
        assert!(display.contains("backend unreachable"));
    }
}
