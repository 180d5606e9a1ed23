pub mod handlers;
pub mod types;

use crate::{
    Result,
    assistant::{CompletionInvoker, CompletionOptions},
    channels::TelegramClient,
    config::{self, Config, RelayMode},
};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Builds the shared handler state for the configured relay mode.
pub fn state_from_config(config: &Config) -> AppState {
    let options = CompletionOptions::for_mode(config.server.mode, &config.llm);
    let invoker = CompletionInvoker::from_config(&config.llm, options);

    let telegram = match config.server.mode {
        RelayMode::Telegram => TelegramClient::from_config(&config.telegram).map(Arc::new),
        RelayMode::Twilio => None,
    };

    AppState {
        invoker: Arc::new(invoker),
        telegram,
    }
}

/// Mounts the webhook for `mode` at `path`. A path not starting with `/`
/// is a configuration error.
pub fn router(state: AppState, mode: RelayMode, path: &str) -> Result<Router> {
    config::validate_webhook_path(path)?;

    let route = match mode {
        RelayMode::Twilio => post(handlers::twilio_webhook),
        RelayMode::Telegram => post(handlers::telegram_webhook),
    };

    Ok(Router::new()
        .route(path, route)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn run(config: Config) -> Result<()> {
    if config.llm.credential().is_none() {
        warn!("OPENAI_API_KEY is not set; every reply will be a configuration error");
    }
    if config.server.mode == RelayMode::Telegram && config.telegram.credential().is_none() {
        warn!("TELEGRAM_BOT_TOKEN is not set; replies cannot be delivered");
    }

    let state = state_from_config(&config);
    let app = router(state, config.server.mode, &config.server.webhook_path)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting {:?} relay on {}{}",
        config.server.mode, addr, config.server.webhook_path
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
