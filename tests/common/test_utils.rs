use super::mocks::MockLlmClient;
use axum::Router;
use salud_relay::{
    Result,
    assistant::{CompletionInvoker, CompletionOptions},
    channels::TelegramClient,
    config::{Config, LlmConfig, RelayMode},
    llm::LlmClient,
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const WEBHOOK_PATH: &str = "/telegram";

/// Create a test configuration with sensible defaults
pub fn create_test_config(mode: RelayMode) -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.mode = mode;
    config.server.logs.level = "debug".to_string();
    config.llm = LlmConfig {
        api_key: Some("test-api-key".to_string()),
        ..LlmConfig::default()
    };
    config
}

/// Invoker backed by `mock`, keeping the caller's handle for request inspection
pub fn invoker_with(mock: &Arc<MockLlmClient>, options: CompletionOptions) -> CompletionInvoker {
    let client: Arc<dyn LlmClient> = mock.clone();
    CompletionInvoker::new(Some(client), options)
}

/// Twilio-mode router over a mocked provider
pub fn twilio_app(invoker: CompletionInvoker) -> Router {
    let state = AppState {
        invoker: Arc::new(invoker),
        telegram: None,
    };
    server::router(state, RelayMode::Twilio, WEBHOOK_PATH).unwrap()
}

/// Telegram-mode router over a mocked provider, sending through `telegram`
pub fn telegram_app(invoker: CompletionInvoker, telegram: Option<TelegramClient>) -> Router {
    let state = AppState {
        invoker: Arc::new(invoker),
        telegram: telegram.map(Arc::new),
    };
    server::router(state, RelayMode::Telegram, WEBHOOK_PATH).unwrap()
}

/// Chat completion body as the OpenAI API returns it
pub fn openai_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "logprobs": null,
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 310, "completion_tokens": 24, "total_tokens": 334 }
    })
}

/// OpenAI API error envelope
pub fn openai_error_body(message: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": "server_error",
            "param": null,
            "code": null
        }
    })
}

/// Successful `sendMessage` answer from the Bot API
pub fn telegram_sent_body(chat_id: i64, text: &str) -> Value {
    json!({
        "ok": true,
        "result": {
            "message_id": 99,
            "chat": { "id": chat_id, "type": "private" },
            "date": 1700000000,
            "text": text
        }
    })
}

/// Telegram webhook update carrying a text message
pub fn telegram_text_update(chat_id: i64, text: &str) -> Value {
    json!({
        "update_id": 123456,
        "message": {
            "message_id": 7,
            "from": { "id": chat_id, "is_bot": false, "first_name": "Lucía" },
            "chat": { "id": chat_id, "type": "private" },
            "date": 1700000000,
            "text": text
        }
    })
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  mode: telegram
  webhook_path: "/webhook"
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:9999/v1"
  api_key: "test-api-key"
  model: "gpt-4o-mini"
  temperature: 0.3
  max_tokens: 120
  system_prompt: "Eres un asistente de pruebas."

telegram:
  bot_token: "123:abc"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
  mode: "sms"
"#;
