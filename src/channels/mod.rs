pub mod telegram;
pub mod twiml;

pub use telegram::{TelegramChat, TelegramClient, TelegramMessage, TelegramUpdate};
pub use twiml::MessagingResponse;
