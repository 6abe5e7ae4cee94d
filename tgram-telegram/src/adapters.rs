//! Adapters between teloxide types and tgram types.

use teloxide::types::{ChatId, Recipient};
use tgram_core::SentMessage;

/// Wraps a teloxide Message for conversion to [`SentMessage`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    pub fn to_sent(&self) -> SentMessage {
        SentMessage {
            message_id: self.0.id.0,
            chat_id: self.0.chat.id.0,
            text: self
                .0
                .text()
                .or_else(|| self.0.caption())
                .map(|s| s.to_string()),
        }
    }
}

/// Numeric ids become [`Recipient::Id`]; anything else (`@channel`) is a channel username.
pub fn recipient(chat_id: &str) -> Recipient {
    match chat_id.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.trim().to_string()),
    }
}
