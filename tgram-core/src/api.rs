//! Delegate client abstraction.
//!
//! [`TelegramApi`] mirrors the Bot API methods the builder needs. Every method takes the
//! assembled [`Params`] mapping; implementations translate it into real requests (see
//! `tgram-telegram`), tests substitute a recording mock.

use async_trait::async_trait;

use crate::error::Result;
use crate::params::Params;
use crate::types::SentMessage;

#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// `sendMessage`: requires `chat_id`, `text`.
    async fn send_message(&self, params: Params) -> Result<SentMessage>;
    /// `sendPhoto`: requires `chat_id`, `photo`; optional `caption`.
    async fn send_photo(&self, params: Params) -> Result<SentMessage>;
    /// `sendDocument`: requires `chat_id`, `document`; optional `caption`.
    async fn send_document(&self, params: Params) -> Result<SentMessage>;
    /// `sendMediaGroup`: requires `chat_id`, `media`. One message per entry.
    async fn send_media_group(&self, params: Params) -> Result<Vec<SentMessage>>;
    /// `editMessageText`: requires `chat_id`, `message_id`, `text`.
    async fn edit_message_text(&self, params: Params) -> Result<SentMessage>;
    /// `editMessageCaption`: requires `chat_id`, `message_id`; optional `caption`.
    async fn edit_message_caption(&self, params: Params) -> Result<SentMessage>;
    /// `deleteMessage`: requires `chat_id`, `message_id`.
    async fn delete_message(&self, params: Params) -> Result<bool>;
    /// `pinChatMessage`: requires `chat_id`, `message_id`.
    async fn pin_chat_message(&self, params: Params) -> Result<bool>;
}
