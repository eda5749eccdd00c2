//! The ReAct reasoning loop.
//!
//! Orchestrates one query: send the transcript to the model, parse the
//! response into steps, dispatch at most one tool per turn, feed the
//! observation back, and terminate on a final answer or the turn budget.

use super::{
    parser::{FINAL_ANSWER_MARKER, StepParser},
    prompt::chef_system_prompt,
    step::Trace,
};
use crate::{
    agent::session::Session,
    error::{AgentError, Result},
    llm::CompletionModel,
    tool::ToolRegistry,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Default turn budget per query
pub const DEFAULT_MAX_TURNS: usize = 5;

/// ReAct loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactConfig {
    /// Maximum reasoning turns per query
    pub max_turns: usize,
}

impl Default for ReactConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Why a query stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The model emitted a `Final Answer:` marker
    FinalAnswer,
    /// The response contained neither an action nor the marker; the raw
    /// text was taken as the answer
    FreeText,
    /// The turn budget ran out while the model kept requesting actions
    Exhausted,
}

/// Result of one query: the answer plus the full reasoning trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutput {
    /// Final answer text; on exhaustion, the last raw assistant content
    pub answer: String,
    /// Ordered record of every Thought/Action/Observation
    pub trace: Trace,
    /// Why the loop stopped
    pub stop: StopReason,
}

/// ReAct agent: reasoning loop over a completion model and a tool registry
pub struct ReactAgent {
    config: ReactConfig,
    model: Arc<dyn CompletionModel>,
    tools: Arc<ToolRegistry>,
    parser: StepParser,
}

impl std::fmt::Debug for ReactAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactAgent")
            .field("config", &self.config)
            .field("tools", &self.tools.tool_names())
            .finish_non_exhaustive()
    }
}

impl ReactAgent {
    /// Create an agent with the default configuration
    pub fn new(model: Arc<dyn CompletionModel>, tools: Arc<ToolRegistry>) -> Self {
        Self::with_config(ReactConfig::default(), model, tools)
    }

    /// Create an agent with an explicit configuration
    pub fn with_config(
        config: ReactConfig,
        model: Arc<dyn CompletionModel>,
        tools: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            config,
            model,
            tools,
            parser: StepParser::new(),
        }
    }

    /// Get the loop configuration
    #[must_use]
    pub fn config(&self) -> &ReactConfig {
        &self.config
    }

    /// Create a session seeded with the chef system instruction,
    /// listing this agent's registered tools
    #[must_use]
    pub fn new_session(&self) -> Session {
        Session::new(chef_system_prompt(&self.tools))
    }

    /// Run one query to completion.
    ///
    /// Each turn appends the pending input as a user message, asks the model
    /// for a completion, and appends the raw reply as an assistant message.
    /// A recognized action is dispatched synchronously and its observation
    /// becomes the next input; a response without an action terminates the
    /// loop with the extracted answer.
    ///
    /// Errors: [`AgentError::UnknownTool`] when the first action names an
    /// unregistered tool (no retry, no further turns); model failures
    /// propagate as [`AgentError::Model`]. Tool backend failures do not
    /// abort the query: they are fed back as failure observations.
    pub async fn query(&self, session: &mut Session, question: &str) -> Result<QueryOutput> {
        let mut trace = Trace::new();
        let mut next_input = question.to_string();
        let mut last_raw = String::new();

        for turn in 0..self.config.max_turns {
            session.push_user(&next_input);
            let raw = self.model.complete(session.messages()).await?;
            session.push_assistant(&raw);

            debug!(turn, chars = raw.len(), "received completion");

            let parsed = self.parser.parse(&raw);
            for thought in &parsed.thoughts {
                trace.thought(thought);
            }

            // At most one action per response is acted upon; later
            // Action lines are parsed but ignored.
            let Some(action) = parsed.dispatched_action().cloned() else {
                let answer = parsed.final_answer.unwrap_or_else(|| raw.clone());
                let stop = if raw.contains(FINAL_ANSWER_MARKER) {
                    StopReason::FinalAnswer
                } else {
                    StopReason::FreeText
                };
                info!(turn, ?stop, steps = trace.step_count(), "query terminated");
                return Ok(QueryOutput {
                    answer,
                    trace,
                    stop,
                });
            };

            trace.action(&action.name, &action.input);

            let observation = match self.tools.call(&action.name, &action.input).await {
                Ok(text) => text,
                Err(err @ AgentError::UnknownTool { .. }) => return Err(err),
                Err(err) => {
                    warn!(tool = %action.name, error = %err, "tool failed; continuing with failure observation");
                    format!("Tool '{}' failed: {err}", action.name)
                }
            };

            trace.observation(&observation);
            next_input = format!("Observation: {observation}");
            last_raw = raw;
        }

        info!(
            max_turns = self.config.max_turns,
            steps = trace.step_count(),
            "turn budget exhausted"
        );
        Ok(QueryOutput {
            answer: last_raw,
            trace,
            stop: StopReason::Exhausted,
        })
    }
}
