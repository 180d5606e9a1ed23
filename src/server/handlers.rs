use super::types::TwilioInbound;
use crate::{
    assistant::{CompletionInvoker, prompt::EMPTY_MESSAGE_REPLY},
    channels::{MessagingResponse, TelegramClient, TelegramUpdate},
};
use axum::{
    Form,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub invoker: Arc<CompletionInvoker>,
    pub telegram: Option<Arc<TelegramClient>>,
}

/// Twilio relay: answers synchronously with a TwiML document. A body that
/// is not a form is treated as a message without text.
pub async fn twilio_webhook(
    State(state): State<AppState>,
    form: Option<Form<TwilioInbound>>,
) -> impl IntoResponse {
    let inbound = form.map(|Form(inbound)| inbound).unwrap_or_default();
    let text = inbound.body.trim();
    info!(
        "Received Twilio message from {}: '{}'",
        inbound.from.as_deref().unwrap_or("unknown"),
        text
    );

    let reply = if text.is_empty() {
        EMPTY_MESSAGE_REPLY.to_string()
    } else {
        let reply = state.invoker.reply(text).await;
        info!("Generated reply: '{}'", reply);
        reply
    };

    let twiml = MessagingResponse::new().message(reply);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        twiml.to_string(),
    )
}

/// Direct Telegram webhook: replies through `sendMessage` and always
/// acknowledges the update with an empty 200 so Telegram does not redeliver.
pub async fn telegram_webhook(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let update: TelegramUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!("Ignoring malformed Telegram update: {}", e);
            return StatusCode::OK;
        }
    };

    let Some((chat_id, text)) = update.text_message() else {
        info!("Ignoring Telegram update {:?} without text", update.update_id);
        return StatusCode::OK;
    };
    info!("Received Telegram message from chat {}: '{}'", chat_id, text);

    let reply = state.invoker.reply(text).await;
    info!("Generated reply: '{}'", reply);

    let Some(telegram) = &state.telegram else {
        error!("Cannot reply to chat {}: TELEGRAM_BOT_TOKEN is not configured", chat_id);
        return StatusCode::OK;
    };

    if let Err(e) = telegram.send_message(chat_id, &reply).await {
        error!("Failed to deliver reply to chat {}: {}", chat_id, e);
    }

    StatusCode::OK
}
