//! Startup configuration for the Mirepoix assistant.
//!
//! Credentials are resolved once at startup; a missing key is fatal before
//! any reasoning loop runs, never a runtime error inside a query.

use crate::error::{AgentError, Result};

/// Environment variable holding the model-provider API key
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the search-provider API key
pub const EXA_API_KEY_VAR: &str = "EXA_API_KEY";

/// Resolved startup settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Model-provider API key
    pub openai_api_key: String,
    /// Search-provider API key
    pub exa_api_key: String,
    /// Model name used for completions
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl Settings {
    /// Create settings with explicit credentials and default model parameters
    pub fn new(openai_api_key: impl Into<String>, exa_api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.into(),
            exa_api_key: exa_api_key.into(),
            model: "gpt-4o".to_string(),
            temperature: 0.0,
        }
    }

    /// Load settings from the process environment.
    ///
    /// Fails with a configuration error if either credential is absent.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = require_var(OPENAI_API_KEY_VAR)?;
        let exa_api_key = require_var(EXA_API_KEY_VAR)?;
        Ok(Self::new(openai_api_key, exa_api_key))
    }

    /// Override the completion model name
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the sampling temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

fn require_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AgentError::configuration(format!(
            "{name} not set in environment"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new("sk-test", "exa-test");
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.temperature, 0.0);
    }

    #[test]
    fn test_builders() {
        let settings = Settings::new("sk-test", "exa-test")
            .with_model("gpt-4o-mini")
            .with_temperature(0.7);
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.temperature, 0.7);
    }
}
