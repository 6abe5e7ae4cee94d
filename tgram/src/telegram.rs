//! The request builder.
//!
//! [`Telegram`] holds one pending request. Setters fill it in; a terminal verb (`send`, `update`,
//! `delete`, `pin`) takes the pending state out of the builder, assembles [`Params`] holding only
//! the fields that were set, and delegates to the [`TelegramApi`]. The builder is left at its
//! defaults afterwards whether the call dispatched, had nothing to do, or failed.

use std::path::PathBuf;
use std::sync::Arc;

use tgram_core::{
    MediaItem, Param, Params, ParseMode, Result, Sent, SentMessage, Storage, TelegramApi,
};
use tgram_telegram::{TelegramBotAdapter, TelegramConfig};
use tracing::{debug, info, instrument};

use crate::keyboard::Keyboard;
use crate::media_group::MediaGroup;

#[derive(Debug, Default, PartialEq)]
struct PendingRequest {
    chat_id: Option<String>,
    message: Option<String>,
    photo: Option<PathBuf>,
    document: Option<PathBuf>,
    media_group: Option<Vec<MediaItem>>,
    parse_mode: ParseMode,
    keyboard: Option<Keyboard>,
    message_id: Option<i32>,
    disable_notification: bool,
}

impl PendingRequest {
    /// Empty strings and empty media groups count as unset.
    fn normalized(mut self) -> Self {
        self.chat_id = self.chat_id.filter(|s| !s.is_empty());
        self.message = self.message.filter(|s| !s.is_empty());
        self.media_group = self.media_group.filter(|m| !m.is_empty());
        self
    }

    /// Fields shared by send and update: chat, parse mode and keyboard.
    fn base_params(
        chat_id: &str,
        parse_mode: ParseMode,
        keyboard: Option<&Keyboard>,
    ) -> Result<Params> {
        let mut params = Params::new();
        params
            .insert("chat_id", Param::Str(chat_id.to_string()))
            .insert("parse_mode", Param::Str(parse_mode.as_str().to_string()));
        if let Some(keyboard) = keyboard {
            params.insert("reply_markup", Param::Markup(keyboard.to_markup()?));
        }
        Ok(params)
    }

    fn target_params(chat_id: &str, message_id: i32) -> Params {
        let mut params = Params::new();
        params
            .insert("chat_id", Param::Str(chat_id.to_string()))
            .insert("message_id", Param::Int(i64::from(message_id)));
        params
    }
}

/// What `send` uploads, picked by precedence: media group, document, photo, text.
enum Payload {
    Group(Vec<MediaItem>),
    Document(PathBuf, Option<String>),
    Photo(PathBuf, Option<String>),
    Text(String),
}

impl Payload {
    fn select(
        media_group: Option<Vec<MediaItem>>,
        document: Option<PathBuf>,
        photo: Option<PathBuf>,
        message: Option<String>,
    ) -> Option<Self> {
        match (media_group, document, photo, message) {
            (Some(media), ..) => Some(Self::Group(media)),
            (None, Some(document), _, caption) => Some(Self::Document(document, caption)),
            (None, None, Some(photo), caption) => Some(Self::Photo(photo, caption)),
            (None, None, None, Some(text)) => Some(Self::Text(text)),
            (None, None, None, None) => None,
        }
    }
}

pub struct Telegram {
    api: Arc<dyn TelegramApi>,
    storage: Storage,
    pending: PendingRequest,
}

impl Telegram {
    pub fn new(api: Arc<dyn TelegramApi>, storage: Storage) -> Self {
        Self {
            api,
            storage,
            pending: PendingRequest::default(),
        }
    }

    /// Builder talking to the Bot API through teloxide with the config's token and storage roots.
    pub fn from_config(config: &TelegramConfig) -> anyhow::Result<Self> {
        let api = TelegramBotAdapter::from_config(config)?;
        Ok(Self::new(Arc::new(api), config.storage()))
    }

    /// Replaces the delegate client.
    pub fn set_api(&mut self, api: Arc<dyn TelegramApi>) -> &mut Self {
        self.api = api;
        self
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn to(&mut self, chat_id: impl Into<String>) -> &mut Self {
        self.pending.chat_id = Some(chat_id.into());
        self
    }

    /// Message text, or the caption when a photo or document is attached.
    pub fn message(&mut self, text: impl Into<String>) -> &mut Self {
        self.pending.message = Some(text.into());
        self
    }

    /// Attaches a photo resolved on the default storage disk. Existence is not checked here.
    /// An empty path leaves the photo unset.
    pub fn photo(&mut self, path: &str) -> &mut Self {
        self.pending.photo = self.resolve(path);
        self
    }

    /// Attaches a document resolved on the default storage disk. Existence is not checked here.
    /// An empty path leaves the document unset.
    pub fn document(&mut self, path: &str) -> &mut Self {
        self.pending.document = self.resolve(path);
        self
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        (!path.is_empty()).then(|| self.storage.path(path))
    }

    pub fn media_group(&mut self, group: MediaGroup) -> &mut Self {
        self.pending.media_group = Some(group.into_items());
        self
    }

    pub fn with_html(&mut self) -> &mut Self {
        self.pending.parse_mode = ParseMode::Html;
        self
    }

    /// MarkdownV2.
    pub fn with_markdown(&mut self) -> &mut Self {
        self.pending.parse_mode = ParseMode::MarkdownV2;
        self
    }

    pub fn with_markdown_legacy(&mut self) -> &mut Self {
        self.pending.parse_mode = ParseMode::Markdown;
        self
    }

    pub fn with_keyboard(&mut self, keyboard: Keyboard) -> &mut Self {
        self.pending.keyboard = Some(keyboard);
        self
    }

    pub fn with_message_id(&mut self, message_id: i32) -> &mut Self {
        self.pending.message_id = Some(message_id);
        self
    }

    pub fn without_notification(&mut self) -> &mut Self {
        self.pending.disable_notification = true;
        self
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.pending.parse_mode
    }

    /// True when nothing has been set since construction or the last terminal verb.
    pub fn is_reset(&self) -> bool {
        self.pending == PendingRequest::default()
    }

    fn take_pending(&mut self) -> PendingRequest {
        std::mem::take(&mut self.pending).normalized()
    }

    /// Sends a media group, document, photo or text message, in that order of precedence.
    /// Returns `Ok(None)` without calling the API when there is no chat or no content.
    #[instrument(skip(self))]
    pub async fn send(&mut self) -> Result<Option<Sent>> {
        let PendingRequest {
            chat_id,
            message,
            photo,
            document,
            media_group,
            parse_mode,
            keyboard,
            disable_notification,
            ..
        } = self.take_pending();
        let Some(chat_id) = chat_id else {
            debug!("send skipped: no chat id");
            return Ok(None);
        };
        let Some(payload) = Payload::select(media_group, document, photo, message) else {
            debug!(%chat_id, "send skipped: no message, photo, document or media group");
            return Ok(None);
        };

        let mut params = PendingRequest::base_params(&chat_id, parse_mode, keyboard.as_ref())?;
        if disable_notification {
            params.insert("disable_notification", Param::Bool(true));
        }

        let sent = match payload {
            Payload::Group(media) => {
                params.insert("media", Param::Media(media));
                log_dispatch("sendMediaGroup", &chat_id, &params);
                return Ok(Some(Sent::Group(self.api.send_media_group(params).await?)));
            }
            Payload::Document(document, caption) => {
                params.insert("document", Param::File(document));
                if let Some(caption) = caption {
                    params.insert("caption", Param::Str(caption));
                }
                log_dispatch("sendDocument", &chat_id, &params);
                self.api.send_document(params).await?
            }
            Payload::Photo(photo, caption) => {
                params.insert("photo", Param::File(photo));
                if let Some(caption) = caption {
                    params.insert("caption", Param::Str(caption));
                }
                log_dispatch("sendPhoto", &chat_id, &params);
                self.api.send_photo(params).await?
            }
            Payload::Text(text) => {
                params.insert("text", Param::Str(text));
                log_dispatch("sendMessage", &chat_id, &params);
                self.api.send_message(params).await?
            }
        };
        Ok(Some(Sent::Message(sent)))
    }

    /// Edits the caption when a photo or document is set, the text otherwise.
    /// Needs chat id, message id and message; `Ok(None)` otherwise.
    #[instrument(skip(self))]
    pub async fn update(&mut self) -> Result<Option<SentMessage>> {
        let PendingRequest {
            chat_id,
            message,
            photo,
            document,
            parse_mode,
            keyboard,
            message_id,
            ..
        } = self.take_pending();
        let (Some(chat_id), Some(message_id), Some(text)) = (chat_id, message_id, message) else {
            debug!("update skipped: chat id, message id and message are all required");
            return Ok(None);
        };

        let mut params = PendingRequest::base_params(&chat_id, parse_mode, keyboard.as_ref())?;
        params.insert("message_id", Param::Int(i64::from(message_id)));

        let edited = if photo.is_some() || document.is_some() {
            params.insert("caption", Param::Str(text));
            log_dispatch("editMessageCaption", &chat_id, &params);
            self.api.edit_message_caption(params).await?
        } else {
            params.insert("text", Param::Str(text));
            log_dispatch("editMessageText", &chat_id, &params);
            self.api.edit_message_text(params).await?
        };
        Ok(Some(edited))
    }

    /// Deletes the message; `Ok(None)` without chat id and message id.
    #[instrument(skip(self))]
    pub async fn delete(&mut self) -> Result<Option<bool>> {
        let req = self.take_pending();
        let (Some(chat_id), Some(message_id)) = (req.chat_id.as_deref(), req.message_id) else {
            debug!("delete skipped: chat id and message id are required");
            return Ok(None);
        };
        let params = PendingRequest::target_params(chat_id, message_id);
        log_dispatch("deleteMessage", chat_id, &params);
        Ok(Some(self.api.delete_message(params).await?))
    }

    /// Pins the message; `Ok(None)` without chat id and message id.
    #[instrument(skip(self))]
    pub async fn pin(&mut self) -> Result<Option<bool>> {
        let req = self.take_pending();
        let (Some(chat_id), Some(message_id)) = (req.chat_id.as_deref(), req.message_id) else {
            debug!("pin skipped: chat id and message id are required");
            return Ok(None);
        };
        let mut params = PendingRequest::target_params(chat_id, message_id);
        if req.disable_notification {
            params.insert("disable_notification", Param::Bool(true));
        }
        log_dispatch("pinChatMessage", chat_id, &params);
        Ok(Some(self.api.pin_chat_message(params).await?))
    }
}

fn log_dispatch(method: &'static str, chat_id: &str, params: &Params) {
    info!(method, chat_id, params = ?params.keys(), "Dispatching Telegram request");
}
