//! Agent implementations and conversation state.

pub mod react;
pub mod session;

pub use react::{QueryOutput, ReactAgent, ReactConfig, StopReason};
pub use session::Session;
