//! ReAct reasoning loop and tool dispatch for the Mirepoix cooking assistant.
//!
//! The crate wires four pieces together: a [`Session`](agent::Session)
//! transcript owned by the caller, a pure [`StepParser`](agent::react::StepParser)
//! over the line-oriented Thought/Action/Final-Answer protocol, a
//! [`ToolRegistry`](tool::ToolRegistry) resolved once at startup, and the
//! [`ReactAgent`](agent::ReactAgent) loop that drives a completion model
//! until a final answer or the turn budget.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod tool;
pub mod types;

pub use agent::{QueryOutput, ReactAgent, ReactConfig, Session, StopReason};
pub use config::Settings;
pub use error::{AgentError, Result};

/// Convenient imports for callers
pub mod prelude {
    pub use crate::{
        agent::{
            QueryOutput, ReactAgent, ReactConfig, Session, StopReason,
            react::{StepParser, Trace, TraceStep},
        },
        config::Settings,
        error::{AgentError, Result},
        llm::{CompletionModel, SiumaiModel},
        tool::{Tool, ToolRegistry, builtin::RecipeSearchTool},
        types::{ChatMessage, MessageRole, SearchHit},
    };
}
