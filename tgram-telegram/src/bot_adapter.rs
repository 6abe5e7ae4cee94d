//! Wraps teloxide::Bot and implements [`tgram_core::TelegramApi`]. Each method reads the
//! parameter mapping assembled by the builder and issues the matching Bot API request.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{
        InlineKeyboardMarkup, InputFile, InputMedia, InputMediaPhoto, InputMediaVideo, MessageId,
        ParseMode as TgParseMode, ReplyMarkup,
    },
};
use tgram_core::{
    MediaKind, Params, ParseMode, Result, SentMessage, TelegramApi, TgramError,
};
use tracing::{debug, warn};

use crate::adapters::{recipient, TelegramMessageWrapper};
use crate::config::TelegramConfig;

/// Thin wrapper around teloxide::Bot that implements tgram's TelegramApi trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Builds the teloxide Bot from config, pointing it at `telegram_api_url` when set.
    pub fn from_config(config: &TelegramConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let bot = teloxide::Bot::new(config.bot_token.clone());
        let bot = match config.telegram_api_url {
            Some(ref url_str) => bot.set_api_url(reqwest::Url::parse(url_str)?),
            None => bot,
        };
        Ok(Self::new(bot))
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[allow(deprecated)]
fn to_teloxide_parse_mode(mode: ParseMode) -> TgParseMode {
    match mode {
        ParseMode::Html => TgParseMode::Html,
        ParseMode::MarkdownV2 => TgParseMode::MarkdownV2,
        ParseMode::Markdown => TgParseMode::Markdown,
    }
}

fn api_error(e: teloxide::RequestError) -> TgramError {
    TgramError::Api(e.to_string())
}

fn message_id(params: &Params) -> Result<MessageId> {
    let raw = params.require_int("message_id")?;
    let id = i32::try_from(raw)
        .map_err(|_| TgramError::invalid_param("message_id", format!("{} out of range", raw)))?;
    Ok(MessageId(id))
}

fn parse_mode(params: &Params) -> Option<TgParseMode> {
    params.parse_mode().map(to_teloxide_parse_mode)
}

fn notify_silently(params: &Params) -> bool {
    params.bool("disable_notification").unwrap_or(false)
}

/// Edits only accept inline keyboards; any other markup is dropped with a warning.
fn inline_markup(params: &Params, method: &'static str) -> Option<InlineKeyboardMarkup> {
    match params.markup("reply_markup")? {
        ReplyMarkup::InlineKeyboard(markup) => Some(markup.clone()),
        _ => {
            warn!(method, "Only inline keyboards can be attached to edits; ignoring reply_markup");
            None
        }
    }
}

#[async_trait]
impl TelegramApi for TelegramBotAdapter {
    async fn send_message(&self, params: Params) -> Result<SentMessage> {
        let chat = recipient(params.require_str("chat_id")?);
        let mut req = self
            .bot
            .send_message(chat, params.require_str("text")?.to_string());
        if let Some(mode) = parse_mode(&params) {
            req = req.parse_mode(mode);
        }
        if let Some(markup) = params.markup("reply_markup") {
            req = req.reply_markup(markup.clone());
        }
        if notify_silently(&params) {
            req = req.disable_notification(true);
        }
        let sent = req.await.map_err(api_error)?;
        Ok(TelegramMessageWrapper(&sent).to_sent())
    }

    async fn send_photo(&self, params: Params) -> Result<SentMessage> {
        let chat = recipient(params.require_str("chat_id")?);
        let photo = InputFile::file(params.require_file("photo")?.to_path_buf());
        let mut req = self.bot.send_photo(chat, photo);
        if let Some(caption) = params.str("caption") {
            req = req.caption(caption.to_string());
        }
        if let Some(mode) = parse_mode(&params) {
            req = req.parse_mode(mode);
        }
        if let Some(markup) = params.markup("reply_markup") {
            req = req.reply_markup(markup.clone());
        }
        if notify_silently(&params) {
            req = req.disable_notification(true);
        }
        let sent = req.await.map_err(api_error)?;
        Ok(TelegramMessageWrapper(&sent).to_sent())
    }

    async fn send_document(&self, params: Params) -> Result<SentMessage> {
        let chat = recipient(params.require_str("chat_id")?);
        let document = InputFile::file(params.require_file("document")?.to_path_buf());
        let mut req = self.bot.send_document(chat, document);
        if let Some(caption) = params.str("caption") {
            req = req.caption(caption.to_string());
        }
        if let Some(mode) = parse_mode(&params) {
            req = req.parse_mode(mode);
        }
        if let Some(markup) = params.markup("reply_markup") {
            req = req.reply_markup(markup.clone());
        }
        if notify_silently(&params) {
            req = req.disable_notification(true);
        }
        let sent = req.await.map_err(api_error)?;
        Ok(TelegramMessageWrapper(&sent).to_sent())
    }

    async fn send_media_group(&self, params: Params) -> Result<Vec<SentMessage>> {
        let chat = recipient(params.require_str("chat_id")?);
        let mode = parse_mode(&params);
        let media: Vec<InputMedia> = params
            .require_media("media")?
            .iter()
            .map(|item| {
                let file = InputFile::file(item.media.clone());
                match item.kind {
                    MediaKind::Photo => {
                        let mut photo = InputMediaPhoto::new(file);
                        if let Some(ref caption) = item.caption {
                            photo = photo.caption(caption.clone());
                        }
                        if let Some(mode) = mode {
                            photo = photo.parse_mode(mode);
                        }
                        InputMedia::Photo(photo)
                    }
                    MediaKind::Video => {
                        let mut video = InputMediaVideo::new(file);
                        if let Some(ref caption) = item.caption {
                            video = video.caption(caption.clone());
                        }
                        if let Some(mode) = mode {
                            video = video.parse_mode(mode);
                        }
                        InputMedia::Video(video)
                    }
                }
            })
            .collect();
        if params.contains_key("reply_markup") {
            warn!("sendMediaGroup does not support reply_markup; keyboard not attached");
        }
        debug!(entries = media.len(), "Uploading media group");

        let mut req = self.bot.send_media_group(chat, media);
        if notify_silently(&params) {
            req = req.disable_notification(true);
        }
        let sent = req.await.map_err(api_error)?;
        Ok(sent
            .iter()
            .map(|m| TelegramMessageWrapper(m).to_sent())
            .collect())
    }

    async fn edit_message_text(&self, params: Params) -> Result<SentMessage> {
        let chat = recipient(params.require_str("chat_id")?);
        let mut req = self.bot.edit_message_text(
            chat,
            message_id(&params)?,
            params.require_str("text")?.to_string(),
        );
        if let Some(mode) = parse_mode(&params) {
            req = req.parse_mode(mode);
        }
        if let Some(markup) = inline_markup(&params, "editMessageText") {
            req = req.reply_markup(markup);
        }
        let sent = req.await.map_err(api_error)?;
        Ok(TelegramMessageWrapper(&sent).to_sent())
    }

    async fn edit_message_caption(&self, params: Params) -> Result<SentMessage> {
        let chat = recipient(params.require_str("chat_id")?);
        let mut req = self.bot.edit_message_caption(chat, message_id(&params)?);
        if let Some(caption) = params.str("caption") {
            req = req.caption(caption.to_string());
        }
        if let Some(mode) = parse_mode(&params) {
            req = req.parse_mode(mode);
        }
        if let Some(markup) = inline_markup(&params, "editMessageCaption") {
            req = req.reply_markup(markup);
        }
        let sent = req.await.map_err(api_error)?;
        Ok(TelegramMessageWrapper(&sent).to_sent())
    }

    async fn delete_message(&self, params: Params) -> Result<bool> {
        let chat = recipient(params.require_str("chat_id")?);
        self.bot
            .delete_message(chat, message_id(&params)?)
            .await
            .map_err(api_error)?;
        Ok(true)
    }

    async fn pin_chat_message(&self, params: Params) -> Result<bool> {
        let chat = recipient(params.require_str("chat_id")?);
        let mut req = self.bot.pin_chat_message(chat, message_id(&params)?);
        if notify_silently(&params) {
            req = req.disable_notification(true);
        }
        req.await.map_err(api_error)?;
        Ok(true)
    }
}
