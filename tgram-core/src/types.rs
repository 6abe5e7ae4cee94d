//! Shared value types: parse mode, media group entries and the client's answers.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Text formatting mode sent as `parse_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParseMode {
    #[default]
    #[serde(rename = "HTML")]
    Html,
    MarkdownV2,
    /// Telegram's legacy Markdown dialect.
    Markdown,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Html => "HTML",
            ParseMode::MarkdownV2 => "MarkdownV2",
            ParseMode::Markdown => "Markdown",
        }
    }

    /// Inverse of [`ParseMode::as_str`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "HTML" => Some(ParseMode::Html),
            "MarkdownV2" => Some(ParseMode::MarkdownV2),
            "Markdown" => Some(ParseMode::Markdown),
            _ => None,
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a media group entry (`type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        }
    }
}

/// One entry of a media group: `{type, media, caption}` where `media` is an absolute local path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub media: PathBuf,
    pub caption: Option<String>,
}

/// A message as returned by the Bot API after send or edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub message_id: i32,
    pub chat_id: i64,
    /// Text for text messages, caption for media.
    pub text: Option<String>,
}

/// Answer of a send: one message, or one per media group entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message(SentMessage),
    Group(Vec<SentMessage>),
}

impl Sent {
    /// Ids of every message produced, in order.
    pub fn message_ids(&self) -> Vec<i32> {
        match self {
            Sent::Message(m) => vec![m.message_id],
            Sent::Group(ms) => ms.iter().map(|m| m.message_id).collect(),
        }
    }

    /// Id of the single message, or of the first message of a group.
    pub fn first_message_id(&self) -> Option<i32> {
        match self {
            Sent::Message(m) => Some(m.message_id),
            Sent::Group(ms) => ms.first().map(|m| m.message_id),
        }
    }
}
