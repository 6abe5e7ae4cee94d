//! # tgram
//!
//! Fluent builder over the Telegram Bot API. Accumulate a request on [`Telegram`] with chainable
//! setters, then finish it with one of the terminal verbs (`send`, `update`, `delete`, `pin`).
//! The terminal verb assembles a [`Params`] mapping, hands it to the configured
//! [`TelegramApi`] and resets the builder.
//!
//! ```no_run
//! # async fn demo(tg: &mut tgram::Telegram) -> tgram::Result<()> {
//! use tgram::{Button, Keyboard};
//!
//! let keyboard = Keyboard::inline().row([
//!     Button::make("Visit Site").url("https://example.com"),
//!     Button::make("Action").callback_data("action_data"),
//! ]);
//! tg.to("@channel")
//!     .message("Hello, <b>world</b>")
//!     .with_keyboard(keyboard)
//!     .without_notification()
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod button;
mod keyboard;
mod media_group;
mod telegram;

pub use button::Button;
pub use keyboard::{KeyButton, Keyboard, KeyboardKind};
pub use media_group::MediaGroup;
pub use telegram::Telegram;

pub use tgram_core::{
    MediaItem, MediaKind, Param, Params, ParseMode, Result, Sent, SentMessage, Storage,
    TelegramApi, TgramError,
};
