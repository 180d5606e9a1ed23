use super::prompt::{CONFIG_ERROR_REPLY, SYSTEM_PROMPT, TECHNICAL_ISSUE_REPLY};
use crate::{
    Error, Result,
    config::{LlmConfig, RelayMode},
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Sampling knobs attached to every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl CompletionOptions {
    /// Only the Twilio relay caps reply length; Telegram replies use the
    /// provider default.
    pub fn for_mode(mode: RelayMode, config: &LlmConfig) -> Self {
        let max_tokens = match mode {
            RelayMode::Twilio => Some(config.max_tokens),
            RelayMode::Telegram => None,
        };
        Self {
            temperature: config.temperature,
            max_tokens,
        }
    }
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self::for_mode(RelayMode::default(), &LlmConfig::default())
    }
}

/// Turns one user message into one assistant reply.
///
/// `reply` never fails: a missing credential or a provider failure is
/// mapped to a fixed user-facing string.
pub struct CompletionInvoker {
    client: Option<Arc<dyn LlmClient>>,
    system_prompt: String,
    options: CompletionOptions,
}

impl CompletionInvoker {
    /// `client` is `None` when no provider credential is configured.
    pub fn new(client: Option<Arc<dyn LlmClient>>, options: CompletionOptions) -> Self {
        Self {
            client,
            system_prompt: SYSTEM_PROMPT.to_string(),
            options,
        }
    }

    pub fn from_config(config: &LlmConfig, options: CompletionOptions) -> Self {
        let client = config
            .credential()
            .map(|key| Arc::new(OpenAiClient::new(key, config)) as Arc<dyn LlmClient>);

        let invoker = Self::new(client, options);
        match &config.system_prompt {
            Some(prompt) if !prompt.trim().is_empty() => invoker.with_system_prompt(prompt),
            _ => invoker,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn options(&self) -> CompletionOptions {
        self.options
    }

    pub async fn reply(&self, message: &str) -> String {
        let Some(client) = &self.client else {
            warn!("Completion skipped: provider API key is not configured");
            return CONFIG_ERROR_REPLY.to_string();
        };

        match self.complete(client.as_ref(), message).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Completion provider call failed: {}", e);
                TECHNICAL_ISSUE_REPLY.to_string()
            }
        }
    }

    async fn complete(&self, client: &dyn LlmClient, message: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(self.system_prompt.as_str()),
                ChatMessage::user(message),
            ],
            max_tokens: self.options.max_tokens,
            temperature: Some(self.options.temperature),
        };

        let response = client.create_chat_completion(request).await?;
        debug!(
            "Completion {} from {} (usage: {:?})",
            response.id, response.model, response.usage
        );

        response
            .first_content()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| Error::llm("completion returned no message content"))
    }
}
