//! Model completion backends.
//!
//! The reasoning loop only ever sees the [`CompletionModel`] trait: a full
//! transcript goes in, one raw assistant text blob comes out. The siumai-backed
//! implementation below is the production path; tests script their own.

use crate::{
    config::Settings,
    error::{AgentError, Result},
    types::{ChatMessage, MessageRole},
};
use async_trait::async_trait;
use siumai::prelude::*;
use siumai::types::ChatMessage as SiumaiMessage;

/// An opaque completion backend: transcript in, raw assistant text out.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Produce the assistant's next turn for the given transcript.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Siumai-backed completion model
pub struct SiumaiModel {
    /// The underlying siumai client
    client: Box<dyn LlmClient>,
    /// Model name, kept for logging
    model: String,
}

impl std::fmt::Debug for SiumaiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiumaiModel")
            .field("model", &self.model)
            .field("client", &"<LlmClient>")
            .finish()
    }
}

impl SiumaiModel {
    /// Build an OpenAI-backed model from settings
    pub async fn openai(settings: &Settings) -> Result<Self> {
        let client = LlmBuilder::new()
            .openai()
            .api_key(settings.openai_api_key.clone())
            .model(&settings.model)
            .temperature(settings.temperature)
            .build()
            .await
            .map_err(|e| AgentError::model(format!("Failed to create OpenAI client: {e}")))?;

        Ok(Self {
            client: Box::new(client),
            model: settings.model.clone(),
        })
    }

    /// Convert transcript messages into siumai chat messages
    fn convert_messages(messages: &[ChatMessage]) -> Vec<SiumaiMessage> {
        messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::System => system!(msg.content.clone()),
                MessageRole::User => user!(msg.content.clone()),
                MessageRole::Assistant => assistant!(msg.content.clone()),
            })
            .collect()
    }
}

#[async_trait]
impl CompletionModel for SiumaiModel {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let siumai_messages = Self::convert_messages(messages);

        tracing::debug!(model = %self.model, turns = messages.len(), "sending completion request");

        let response = self
            .client
            .chat(siumai_messages)
            .await
            .map_err(|e| AgentError::model(format!("Chat request failed: {e}")))?;

        if let Some(text) = response.content_text() {
            Ok(text.to_string())
        } else {
            Err(AgentError::model("No text content in response"))
        }
    }
}
