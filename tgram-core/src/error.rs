use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TgramError {
    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Keyboard error: {0}")]
    Keyboard(String),

    #[error("Invalid parameter `{key}`: {reason}")]
    InvalidParam { key: &'static str, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TgramError {
    /// Shorthand for a missing or mistyped entry in a [`crate::Params`] mapping.
    pub fn invalid_param(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            key,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TgramError>;
