//! ReAct (Reasoning and Acting) loop implementation.
//!
//! The pattern alternates:
//! 1. **Reason** about the problem (`Thought:` lines)
//! 2. **Act** by invoking a registered tool (`Action: <name>: <input>`)
//! 3. **Observe** the tool result fed back into the transcript
//! 4. **Repeat** until a `Final Answer:` or the turn budget

pub mod agent;
pub mod parser;
pub mod prompt;
pub mod step;

pub use agent::{DEFAULT_MAX_TURNS, QueryOutput, ReactAgent, ReactConfig, StopReason};
pub use parser::{ActionRequest, FINAL_ANSWER_MARKER, ParsedTurn, StepParser};
pub use step::{StepKind, Trace, TraceStep};
