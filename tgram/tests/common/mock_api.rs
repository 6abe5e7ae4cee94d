//! Mock implementation of [`tgram::TelegramApi`] for integration tests.
//!
//! Records every call with its method name and parameter mapping so tests can assert on exactly
//! what the builder assembled, without hitting Telegram.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tgram::{Params, Result, SentMessage, TelegramApi, TgramError};

/// One recorded call: Bot API method name plus the parameters it received.
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub method: &'static str,
    pub params: Params,
}

/// Mock API that records calls and answers with a fixed message id.
pub struct MockApi {
    message_id: i32,
    fail: bool,
    calls: Mutex<Vec<CallRecord>>,
}

impl MockApi {
    /// Mock answering every send/edit with `message_id` 123.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            message_id: 123,
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Mock that records the call, then fails it with an API error.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            message_id: 0,
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.lock().unwrap().clone()
    }

    /// The only recorded call; panics unless exactly one was made.
    pub fn single_call(&self) -> CallRecord {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }

    fn record(&self, method: &'static str, params: Params) -> Result<SentMessage> {
        let text = params
            .str("text")
            .or_else(|| params.str("caption"))
            .map(str::to_string);
        self.calls.lock().unwrap().push(CallRecord { method, params });
        if self.fail {
            return Err(TgramError::Api(format!("{} failed", method)));
        }
        Ok(SentMessage {
            message_id: self.message_id,
            chat_id: -100,
            text,
        })
    }
}

#[async_trait]
impl TelegramApi for MockApi {
    async fn send_message(&self, params: Params) -> Result<SentMessage> {
        self.record("sendMessage", params)
    }

    async fn send_photo(&self, params: Params) -> Result<SentMessage> {
        self.record("sendPhoto", params)
    }

    async fn send_document(&self, params: Params) -> Result<SentMessage> {
        self.record("sendDocument", params)
    }

    async fn send_media_group(&self, params: Params) -> Result<Vec<SentMessage>> {
        let count = params.media("media").map(|m| m.len()).unwrap_or(0);
        let first = self.record("sendMediaGroup", params)?;
        Ok((0..count)
            .map(|i| SentMessage {
                message_id: first.message_id + i as i32,
                chat_id: first.chat_id,
                text: None,
            })
            .collect())
    }

    async fn edit_message_text(&self, params: Params) -> Result<SentMessage> {
        self.record("editMessageText", params)
    }

    async fn edit_message_caption(&self, params: Params) -> Result<SentMessage> {
        self.record("editMessageCaption", params)
    }

    async fn delete_message(&self, params: Params) -> Result<bool> {
        self.record("deleteMessage", params).map(|_| true)
    }

    async fn pin_chat_message(&self, params: Params) -> Result<bool> {
        self.record("pinChatMessage", params).map(|_| true)
    }
}
