//! Tool registry for name-to-capability lookup.

use crate::{
    error::{AgentError, Result},
    tool::Tool,
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info, warn};

/// Registry mapping tool names to capabilities.
///
/// Built once at startup and shared immutably (via `Arc`) for the process
/// lifetime; there is no unregistration path.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool in the registry
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();

        if self.tools.contains_key(&name) {
            return Err(AgentError::configuration(format!(
                "Tool '{name}' is already registered"
            )));
        }

        info!("Registering tool: {}", name);
        self.tools.insert(name, tool);

        Ok(())
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).map(Arc::clone)
    }

    /// Check if a tool exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all registered tool names
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Render a `- name: description` listing for prompt assembly
    #[must_use]
    pub fn describe(&self) -> String {
        if self.tools.is_empty() {
            return "No tools available".to_string();
        }
        let mut lines: Vec<String> = self
            .tools
            .values()
            .map(|tool| format!("- {}: {}", tool.name(), tool.description()))
            .collect();
        lines.sort();
        lines.join("\n")
    }

    /// Invoke a tool by name with the raw input string.
    ///
    /// Fails with [`AgentError::UnknownTool`] if the name is not registered.
    pub async fn call(&self, name: &str, input: &str) -> Result<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| AgentError::unknown_tool(name, input))?;

        debug!("Invoking tool '{}' with input: {:?}", name, input);

        let result = tool.call(input).await;
        if let Err(e) = &result {
            warn!("Tool '{}' invocation failed: {}", name, e);
        }

        result
    }
}
