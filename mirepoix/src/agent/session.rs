//! Conversation session owned by the caller.
//!
//! A session holds the ordered transcript the model reasons over. The caller
//! creates it once, passes it `&mut` into each query, and keeps it for the
//! next question; the reasoning loop is stateless with respect to storage.

use crate::types::{ChatMessage, SessionId};
use uuid::Uuid;

/// Append-only conversation transcript.
///
/// Invariants: the first message (if any) is the system instruction and is
/// never removed; messages are only ever appended. During a query the
/// reasoning loop is the sole writer.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    messages: Vec<ChatMessage>,
}

impl Session {
    /// Create a session whose transcript starts with the system instruction
    pub fn new(system_instruction: impl Into<String>) -> Self {
        let instruction = system_instruction.into();
        let mut messages = Vec::new();
        if !instruction.is_empty() {
            messages.push(ChatMessage::system(instruction));
        }
        Self {
            id: Uuid::new_v4(),
            messages,
        }
    }

    /// Get the session identifier
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Append a user message
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    /// Append an assistant message
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Get the ordered transcript
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the transcript
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the transcript is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn test_system_message_first() {
        let mut session = Session::new("You are a chef assistant.");
        session.push_user("hi");
        session.push_assistant("Thought: greet back");

        assert_eq!(session.len(), 3);
        assert_eq!(session.messages()[0].role, MessageRole::System);
        assert_eq!(session.messages()[1].role, MessageRole::User);
        assert_eq!(session.messages()[2].role, MessageRole::Assistant);
    }

    #[test]
    fn test_empty_instruction_yields_empty_transcript() {
        let session = Session::new("");
        assert!(session.is_empty());
    }

    #[test]
    fn test_append_only_ordering() {
        let mut session = Session::new("sys");
        for i in 0..4 {
            session.push_user(format!("q{i}"));
        }
        let contents: Vec<&str> = session
            .messages()
            .iter()
            .skip(1)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["q0", "q1", "q2", "q3"]);
    }
}
