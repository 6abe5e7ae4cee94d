//! Inline and reply keyboards built row by row.

use teloxide::types::{InlineKeyboardMarkup, KeyboardMarkup, ReplyMarkup};
use tgram_core::Result;

use crate::button::Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    Inline,
    Reply,
}

/// One entry of a keyboard row: a bare label or a full [`Button`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyButton {
    /// On inline keyboards the label doubles as callback data.
    Text(String),
    Button(Button),
}

impl From<&str> for KeyButton {
    fn from(text: &str) -> Self {
        KeyButton::Text(text.to_string())
    }
}

impl From<String> for KeyButton {
    fn from(text: String) -> Self {
        KeyButton::Text(text)
    }
}

impl From<Button> for KeyButton {
    fn from(button: Button) -> Self {
        KeyButton::Button(button)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    kind: KeyboardKind,
    rows: Vec<Vec<KeyButton>>,
}

impl Keyboard {
    pub fn inline() -> Self {
        Self {
            kind: KeyboardKind::Inline,
            rows: Vec::new(),
        }
    }

    pub fn reply() -> Self {
        Self {
            kind: KeyboardKind::Reply,
            rows: Vec::new(),
        }
    }

    /// Appends a row below the existing ones.
    pub fn row<I, B>(mut self, buttons: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<KeyButton>,
    {
        self.rows.push(buttons.into_iter().map(Into::into).collect());
        self
    }

    pub fn kind(&self) -> KeyboardKind {
        self.kind
    }

    pub fn is_inline(&self) -> bool {
        self.kind == KeyboardKind::Inline
    }

    pub fn rows(&self) -> &[Vec<KeyButton>] {
        &self.rows
    }

    /// Builds the client library's reply markup, keeping row order and button order in each row.
    pub fn to_markup(&self) -> Result<ReplyMarkup> {
        match self.kind {
            KeyboardKind::Inline => {
                let rows = self
                    .rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|entry| match entry {
                                KeyButton::Text(text) => Button::make(text.clone())
                                    .callback_data(text.clone())
                                    .to_inline(),
                                KeyButton::Button(button) => button.to_inline(),
                            })
                            .collect::<Result<Vec<_>>>()
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(rows)))
            }
            KeyboardKind::Reply => {
                let rows = self.rows.iter().map(|row| {
                    row.iter()
                        .map(|entry| match entry {
                            KeyButton::Text(text) => Button::make(text.clone()).to_reply(),
                            KeyButton::Button(button) => button.to_reply(),
                        })
                        .collect::<Vec<_>>()
                });
                Ok(ReplyMarkup::Keyboard(KeyboardMarkup::new(rows)))
            }
        }
    }
}
