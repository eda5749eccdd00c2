//! Tool system for agent capabilities.
//!
//! A tool is a named external capability the model can invoke through an
//! `Action: <name>: <input>` line. The input is the raw remainder of that
//! line, unparsed; the output is the text fed back as the observation.

use crate::error::Result;
use async_trait::async_trait;

pub mod builtin;
pub mod registry;

pub use registry::ToolRegistry;

/// Core tool trait that all tools must implement
#[async_trait]
pub trait Tool: Send + Sync + std::fmt::Debug {
    /// Get the tool name the model addresses it by
    fn name(&self) -> &str;

    /// Get a one-line description for prompt assembly
    fn description(&self) -> &str;

    /// Invoke the tool with the raw input string from the Action line.
    ///
    /// The returned string becomes the observation text. Backend failures
    /// are reported as errors; the reasoning loop converts them into
    /// failure observations rather than aborting the query.
    async fn call(&self, input: &str) -> Result<String>;
}
