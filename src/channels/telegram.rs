//! Telegram Bot API: inbound webhook updates and the outbound `sendMessage` call.

use crate::{Error, Result, config::TelegramConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Longest text `sendMessage` accepts.
pub const TELEGRAM_MAX_MESSAGE_LENGTH: usize = 4096;

/// Webhook update. Only plain messages are relayed; every other update kind
/// deserializes with `message: None`.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUpdate {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default)]
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    #[serde(default)]
    pub message_id: Option<i64>,
    pub chat: TelegramChat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
}

impl TelegramUpdate {
    /// Chat id and trimmed text of a message carrying non-blank text.
    pub fn text_message(&self) -> Option<(i64, &str)> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref()?.trim();
        if text.is_empty() {
            return None;
        }
        Some((message.chat.id, text))
    }
}

pub struct TelegramClient {
    client: reqwest::Client,
    api_base: String,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(api_base: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            bot_token: bot_token.into(),
        }
    }

    /// Builds a client when a bot token is configured.
    pub fn from_config(config: &TelegramConfig) -> Option<Self> {
        config
            .credential()
            .map(|token| Self::new(config.api_base.as_str(), token))
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }

    /// Sends `text` to `chat_id`, cut to [`TELEGRAM_MAX_MESSAGE_LENGTH`]
    /// characters.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        debug!("Sending Telegram message to chat {}", chat_id);

        let text = truncate_message(text);

        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(Error::telegram(format!(
                "sendMessage failed with status {}: {}",
                status,
                describe_error(&body_text)
            )));
        }

        let data: serde_json::Value = serde_json::from_str(&body_text)?;
        let ok = data
            .get("ok")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true);
        if !ok {
            return Err(Error::telegram(format!(
                "sendMessage rejected: {}",
                describe_error(&body_text)
            )));
        }

        Ok(())
    }
}

fn truncate_message(text: &str) -> &str {
    match text.char_indices().nth(TELEGRAM_MAX_MESSAGE_LENGTH) {
        Some((cut, _)) => {
            warn!(
                "Reply exceeds {} characters, truncating",
                TELEGRAM_MAX_MESSAGE_LENGTH
            );
            &text[..cut]
        }
        None => text,
    }
}

fn describe_error(body_text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body_text)
        .ok()
        .and_then(|data| {
            data.get("description")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body_text.to_string())
}
