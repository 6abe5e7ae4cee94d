//! Keyboard button description.

use reqwest::Url;
use teloxide::types::{ButtonRequest, InlineKeyboardButton, KeyboardButton};
use tgram_core::{Result, TgramError};

/// A button as a set of optional Bot API fields. `text` is always present; every other field is
/// only set when its setter was called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    text: String,
    url: Option<String>,
    callback_data: Option<String>,
    switch_inline_query: Option<String>,
    switch_inline_query_current_chat: Option<String>,
    request_contact: Option<bool>,
    request_location: Option<bool>,
}

impl Button {
    pub fn make(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            request_contact: None,
            request_location: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn callback_data(mut self, data: impl Into<String>) -> Self {
        self.callback_data = Some(data.into());
        self
    }

    pub fn switch_inline_query(mut self, query: impl Into<String>) -> Self {
        self.switch_inline_query = Some(query.into());
        self
    }

    pub fn switch_inline_query_current_chat(mut self, query: impl Into<String>) -> Self {
        self.switch_inline_query_current_chat = Some(query.into());
        self
    }

    pub fn request_contact(mut self, request: bool) -> Self {
        self.request_contact = Some(request);
        self
    }

    pub fn request_location(mut self, request: bool) -> Self {
        self.request_location = Some(request);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Names of the fields that are set, in Bot API spelling.
    pub fn fields(&self) -> Vec<&'static str> {
        let optional = [
            ("url", self.url.is_some()),
            ("callback_data", self.callback_data.is_some()),
            ("switch_inline_query", self.switch_inline_query.is_some()),
            (
                "switch_inline_query_current_chat",
                self.switch_inline_query_current_chat.is_some(),
            ),
            ("request_contact", self.request_contact.is_some()),
            ("request_location", self.request_location.is_some()),
        ];
        std::iter::once("text")
            .chain(optional.into_iter().filter(|(_, set)| *set).map(|(k, _)| k))
            .collect()
    }

    /// Converts to an inline keyboard button. The action is picked in order url, callback data,
    /// inline query, inline query in current chat; a button with none of them is rejected.
    pub(crate) fn to_inline(&self) -> Result<InlineKeyboardButton> {
        if let Some(url) = &self.url {
            let parsed = Url::parse(url).map_err(|e| {
                TgramError::Keyboard(format!("button `{}` has invalid url {}: {}", self.text, url, e))
            })?;
            return Ok(InlineKeyboardButton::url(self.text.clone(), parsed));
        }
        if let Some(data) = &self.callback_data {
            return Ok(InlineKeyboardButton::callback(self.text.clone(), data.clone()));
        }
        if let Some(query) = &self.switch_inline_query {
            return Ok(InlineKeyboardButton::switch_inline_query(
                self.text.clone(),
                query.clone(),
            ));
        }
        if let Some(query) = &self.switch_inline_query_current_chat {
            return Ok(InlineKeyboardButton::switch_inline_query_current_chat(
                self.text.clone(),
                query.clone(),
            ));
        }
        Err(TgramError::Keyboard(format!(
            "inline button `{}` needs url, callback_data or an inline query",
            self.text
        )))
    }

    /// Converts to a reply keyboard button. Only `text` and the contact/location requests apply.
    pub(crate) fn to_reply(&self) -> KeyboardButton {
        let button = KeyboardButton::new(self.text.clone());
        if self.request_contact == Some(true) {
            button.request(ButtonRequest::Contact)
        } else if self.request_location == Some(true) {
            button.request(ButtonRequest::Location)
        } else {
            button
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_make_sets_only_text() {
        let button = Button::make("Hi");
        assert_eq!(button.text(), "Hi");
        assert_eq!(button.fields(), vec!["text"]);
    }

    #[test]
    fn test_fields_are_exactly_those_set() {
        let button = Button::make("Share")
            .switch_inline_query("q")
            .request_location(false);
        assert_eq!(
            button.fields(),
            vec!["text", "switch_inline_query", "request_location"]
        );
    }

    #[test]
    fn test_inline_url_button() {
        let button = Button::make("Visit").url("https://example.com").to_inline().unwrap();
        assert_eq!(button.text, "Visit");
        match button.kind {
            InlineKeyboardButtonKind::Url(url) => assert_eq!(url.as_str(), "https://example.com/"),
            other => panic!("expected url button, got {:?}", other),
        }
    }

    #[test]
    fn test_inline_callback_button() {
        let button = Button::make("Go").callback_data("go").to_inline().unwrap();
        assert_eq!(button.kind, InlineKeyboardButtonKind::CallbackData("go".to_string()));
    }

    #[test]
    fn test_inline_button_requires_action() {
        assert!(matches!(
            Button::make("Nothing").to_inline(),
            Err(TgramError::Keyboard(_))
        ));
        assert!(Button::make("Bad").url("not a url").to_inline().is_err());
    }

    #[test]
    fn test_reply_button_requests() {
        let contact = Button::make("Phone").request_contact(true).to_reply();
        assert_eq!(contact.request, Some(ButtonRequest::Contact));
        let location = Button::make("Where").request_location(true).to_reply();
        assert_eq!(location.request, Some(ButtonRequest::Location));
        let plain = Button::make("Plain").request_contact(false).to_reply();
        assert_eq!(plain.request, None);
    }
}
