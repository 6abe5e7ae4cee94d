//! Parameter mapping assembled by the builder and consumed by a [`crate::TelegramApi`].
//!
//! Keys are Bot API field names. Only fields that were actually set are present, so a
//! client can forward the mapping as-is and tests can assert on exact key sets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use teloxide::types::ReplyMarkup;

use crate::error::{Result, TgramError};
use crate::types::{MediaItem, ParseMode};

/// A single typed value in [`Params`].
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Str(String),
    Int(i64),
    Bool(bool),
    /// Absolute local path of a file to upload.
    File(PathBuf),
    Markup(ReplyMarkup),
    Media(Vec<MediaItem>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<&'static str, Param>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: Param) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Param::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(Param::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(Param::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn file(&self, key: &str) -> Option<&Path> {
        match self.entries.get(key) {
            Some(Param::File(p)) => Some(p),
            _ => None,
        }
    }

    pub fn markup(&self, key: &str) -> Option<&ReplyMarkup> {
        match self.entries.get(key) {
            Some(Param::Markup(m)) => Some(m),
            _ => None,
        }
    }

    pub fn media(&self, key: &str) -> Option<&[MediaItem]> {
        match self.entries.get(key) {
            Some(Param::Media(items)) => Some(items),
            _ => None,
        }
    }

    /// `parse_mode` decoded back into a [`ParseMode`]; unknown strings yield `None`.
    pub fn parse_mode(&self) -> Option<ParseMode> {
        self.str("parse_mode").and_then(ParseMode::parse)
    }

    pub fn require_str(&self, key: &'static str) -> Result<&str> {
        self.str(key)
            .ok_or_else(|| TgramError::invalid_param(key, "expected a string"))
    }

    pub fn require_int(&self, key: &'static str) -> Result<i64> {
        self.int(key)
            .ok_or_else(|| TgramError::invalid_param(key, "expected an integer"))
    }

    pub fn require_file(&self, key: &'static str) -> Result<&Path> {
        self.file(key)
            .ok_or_else(|| TgramError::invalid_param(key, "expected a file path"))
    }

    pub fn require_media(&self, key: &'static str) -> Result<&[MediaItem]> {
        self.media(key)
            .ok_or_else(|| TgramError::invalid_param(key, "expected media entries"))
    }
}
