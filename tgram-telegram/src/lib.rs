//! # tgram-telegram
//!
//! Telegram transport for the tgram builder: [`TelegramBotAdapter`] implements
//! [`tgram_core::TelegramApi`] on top of teloxide, [`TelegramConfig`] loads token, default bot
//! profile and storage roots from the environment.

mod adapters;
mod bot_adapter;
mod config;

pub use adapters::{recipient, TelegramMessageWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{BotProfile, StorageConfig, TelegramConfig, DEFAULT_BOT_NAME};
