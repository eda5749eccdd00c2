//! Reasoning step records and the per-query trace.
//!
//! Every Thought, Action, and Observation the loop emits is appended to a
//! [`Trace`] in encounter order. The final answer is returned to the caller
//! separately and never appears in the trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of reasoning step, for display routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Free-text reasoning
    Thought,
    /// Tool invocation request
    Action,
    /// Tool result fed back into the transcript
    Observation,
}

/// A single recorded step of the reasoning loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceStep {
    /// Free-text reasoning, no side effect
    Thought {
        /// The thought content
        text: String,
    },
    /// A dispatched tool invocation
    Action {
        /// Tool name
        tool: String,
        /// Raw, unparsed input string
        input: String,
    },
    /// The result of a tool invocation
    Observation {
        /// Observation content
        text: String,
    },
}

impl TraceStep {
    /// Get the kind of this step
    #[must_use]
    pub fn kind(&self) -> StepKind {
        match self {
            TraceStep::Thought { .. } => StepKind::Thought,
            TraceStep::Action { .. } => StepKind::Action,
            TraceStep::Observation { .. } => StepKind::Observation,
        }
    }

    /// Render the step as display text
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            TraceStep::Thought { text } | TraceStep::Observation { text } => text.clone(),
            TraceStep::Action { tool, input } => format!("{tool}: {input}"),
        }
    }
}

/// Ordered, append-only record of one query's reasoning steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    /// Trace identifier
    pub id: Uuid,
    /// All recorded steps in encounter order
    pub steps: Vec<TraceStep>,
    /// Timestamp when the trace was created
    pub created_at: DateTime<Utc>,
}

impl Trace {
    /// Create a new empty trace
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            steps: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a step
    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// Record a thought
    pub fn thought(&mut self, text: impl Into<String>) {
        self.push(TraceStep::Thought { text: text.into() });
    }

    /// Record a dispatched action
    pub fn action(&mut self, tool: impl Into<String>, input: impl Into<String>) {
        self.push(TraceStep::Action {
            tool: tool.into(),
            input: input.into(),
        });
    }

    /// Record an observation
    pub fn observation(&mut self, text: impl Into<String>) {
        self.push(TraceStep::Observation { text: text.into() });
    }

    /// Get all thought texts in order
    #[must_use]
    pub fn thoughts(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                TraceStep::Thought { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get all dispatched actions as (tool, input) pairs in order
    #[must_use]
    pub fn actions(&self) -> Vec<(&str, &str)> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                TraceStep::Action { tool, input } => Some((tool.as_str(), input.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Get all observation texts in order
    #[must_use]
    pub fn observations(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                TraceStep::Observation { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get the number of recorded steps
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Check if the trace is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_ordering_and_accessors() {
        let mut trace = Trace::new();
        trace.thought("need a recipe");
        trace.action("search_recipes", "coq au vin");
        trace.observation("1. Coq au Vin (https://example.com)");
        trace.thought("that settles it");

        assert_eq!(trace.step_count(), 4);
        assert_eq!(trace.thoughts(), vec!["need a recipe", "that settles it"]);
        assert_eq!(trace.actions(), vec![("search_recipes", "coq au vin")]);
        assert_eq!(
            trace.observations(),
            vec!["1. Coq au Vin (https://example.com)"]
        );
        assert_eq!(trace.steps[1].kind(), StepKind::Action);
        assert_eq!(trace.steps[1].text(), "search_recipes: coq au vin");
    }

    #[test]
    fn test_trace_serialization_tags() {
        let mut trace = Trace::new();
        trace.thought("hmm");
        trace.action("search_recipes", "tarte tatin");

        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["steps"][0]["type"], "thought");
        assert_eq!(json["steps"][1]["type"], "action");
        assert_eq!(json["steps"][1]["tool"], "search_recipes");
    }
}
