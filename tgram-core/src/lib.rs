//! # tgram-core
//!
//! Core pieces shared by the builder and its transports: the [`Params`] mapping handed to the
//! client, the [`TelegramApi`] trait the builder delegates to, [`Storage`] disks for resolving
//! upload paths, error types and tracing initialization. Transport-agnostic apart from the
//! teloxide markup type carried inside [`Param::Markup`].

pub mod api;
pub mod error;
pub mod logger;
pub mod params;
pub mod storage;
pub mod types;

pub use api::TelegramApi;
pub use error::{Result, TgramError};
pub use logger::init_tracing;
pub use params::{Param, Params};
pub use storage::{Disk, Storage};
pub use types::{MediaItem, MediaKind, ParseMode, Sent, SentMessage};
